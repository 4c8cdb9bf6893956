//! DTOs for the posts endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPost, PostListing};

/// Body text of the successful creation response.
///
/// The spelling of "sucessfully" is part of the wire contract; existing
/// clients match on the exact text.
pub const POST_CREATED: &str = "Created post sucessfully";

/// Request body for `POST /posts`.
///
/// Every field is `Option` so that an absent field reaches the handler as
/// `None` instead of failing deserialization; the handler owns the 400
/// response for missing data. For the reference ids only *presence* is
/// required: `0` is a legal id.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub status_id: Option<i32>,
}

impl CreatePostRequest {
    /// Converts the request into an insertable [`NewPost`].
    ///
    /// Returns `None` when `title`, `image`, or `content` is absent or
    /// empty, or when `category_id` or `status_id` is absent.
    pub fn into_new_post(self) -> Option<NewPost> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let image = self.image.filter(|i| !i.is_empty())?;
        let content = self.content.filter(|c| !c.is_empty())?;
        let category_id = self.category_id?;
        let status_id = self.status_id?;

        Some(NewPost {
            title,
            image,
            category_id,
            description: self.description,
            content,
            status_id,
        })
    }
}

/// Response body for `POST /posts` success.
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub message: &'static str,
}

impl CreatePostResponse {
    pub fn created() -> Self {
        Self {
            message: POST_CREATED,
        }
    }
}

/// Response body for `GET /posts` success.
#[derive(Debug, Serialize)]
pub struct ListPostsResponse {
    pub success: bool,
    pub data: Vec<PostItem>,
    pub count: usize,
}

/// A single post in the listing.
///
/// `category_name`/`status_name` serialize as `null` when the reference row
/// does not exist; the post itself is always present.
#[derive(Debug, Serialize)]
pub struct PostItem {
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

impl From<PostListing> for PostItem {
    fn from(listing: PostListing) -> Self {
        Self {
            id: listing.id,
            image: listing.image,
            title: listing.title,
            description: listing.description,
            date: listing.date,
            content: listing.content,
            likes_count: listing.likes_count,
            category_name: listing.category_name,
            status_name: listing.status_name,
        }
    }
}
