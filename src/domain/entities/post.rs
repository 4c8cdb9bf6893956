//! Post entity and its projections.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted post row.
///
/// `id`, `date`, and `likes_count` are assigned by the store; clients never
/// supply them.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub description: Option<String>,
    pub content: String,
    pub category_id: i32,
    pub status_id: i32,
    pub date: DateTime<Utc>,
    pub likes_count: i32,
}

/// Input data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub content: String,
    pub status_id: i32,
}

/// Listing projection: a post joined with its category and status reference
/// rows.
///
/// The joins are outer, so `category_name`/`status_name` are `None` when the
/// referenced row does not exist; the post itself is never dropped.
#[derive(Debug, Clone, FromRow)]
pub struct PostListing {
    pub id: i32,
    pub image: String,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub content: String,
    pub likes_count: i32,
    pub category_name: Option<String>,
    pub status_name: Option<String>,
}
