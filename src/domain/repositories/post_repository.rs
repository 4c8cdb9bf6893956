//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostListing};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for posts.
///
/// The single shared connection pool lives behind this trait; handlers issue
/// exactly one statement per request through it and never touch the driver
/// directly.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists all posts joined with their category and status names, ordered
    /// by `date` descending, ties broken by `id` descending.
    ///
    /// An empty store yields `Ok(vec![])`, not an error.
    ///
    /// # Errors
    ///
    /// Returns the classified [`StoreError`] for any driver-level fault.
    async fn list(&self) -> Result<Vec<PostListing>, StoreError>;

    /// Inserts a new post and returns the generated row.
    ///
    /// `date` and `likes_count` are assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns the classified [`StoreError`] for any driver-level fault,
    /// including constraint violations from unresolvable reference ids.
    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Issues a trivial statement to test connectivity.
    ///
    /// Used by the non-blocking startup probe; never called per-request.
    async fn ping(&self) -> Result<(), StoreError>;
}
