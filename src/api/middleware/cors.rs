//! Cross-origin policy from the configured allow-list.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer permitting only the configured front-end origins.
///
/// Listed origins may call with `GET`/`POST` and a `Content-Type` header.
/// Credentials are not required, so none are allowed. An empty list leaves
/// the service same-origin only.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let mut origins = Vec::with_capacity(allowed_origins.len());
    for origin in allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!("Ignoring invalid CORS origin: {origin}"),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
