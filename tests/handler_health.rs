mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use posts_service::api::handlers::{health_handler, list_posts_handler};
use posts_service::error::StoreError;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new().route("/health", get(health_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "OK");
}

#[tokio::test]
async fn test_health_does_not_depend_on_store() {
    // A state whose repository fails on every call: /posts degrades to 500
    // while /health keeps answering 200.
    let state = common::state_with(Arc::new(common::FailingPostRepository::new(
        StoreError::ConnectionRefused {
            message: "connection refused".to_string(),
        },
    )));

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/posts", get(list_posts_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let posts_response = server.get("/posts").await;
    posts_response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let health_response = server.get("/health").await;
    health_response.assert_status_ok();

    let json = health_response.json::<serde_json::Value>();
    assert_eq!(json["message"], "OK");
}
