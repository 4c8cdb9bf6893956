use std::sync::Arc;

use crate::domain::repositories::PostRepository;

/// Shared application state injected into handlers.
///
/// Carries the data-access implementation behind a trait object so tests can
/// substitute an in-memory or mock repository for the PostgreSQL one.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
