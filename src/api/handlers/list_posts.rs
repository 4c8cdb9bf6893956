//! Handler for the post listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::posts::{ListPostsResponse, PostItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all posts with their category and status names.
///
/// # Endpoint
///
/// `GET /posts`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 7,
///       "image": "https://cdn.example.com/cat.png",
///       "title": "Cat care",
///       "description": null,
///       "date": "2026-08-01T10:00:00Z",
///       "content": "...",
///       "likes_count": 0,
///       "category_name": "Cat",
///       "status_name": "published"
///     }
///   ],
///   "count": 1
/// }
/// ```
///
/// Ordered by `date` descending, ties broken by `id` descending. An empty
/// store yields `data: []`, `count: 0` with status 200.
///
/// # Errors
///
/// Any store fault becomes a 500 with the `{success, error, message, code}`
/// body; see [`crate::error::AppError`].
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<ListPostsResponse>, AppError> {
    let rows = state.posts.list().await.map_err(AppError::FetchPosts)?;

    let data: Vec<PostItem> = rows.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(ListPostsResponse {
        success: true,
        data,
        count,
    }))
}
