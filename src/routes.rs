//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Liveness probe (no data access)
//! - `GET  /posts`  - List posts with category/status names
//! - `POST /posts`  - Create a post
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Allow-list from `CORS_ALLOWED_ORIGINS`
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_post_handler, health_handler, list_posts_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - origins permitted by the cross-origin policy
pub fn app_router(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
