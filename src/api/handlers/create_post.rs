//! Handler for the post creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::posts::{CreatePostRequest, CreatePostResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new post.
///
/// # Endpoint
///
/// `POST /posts`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Cat care",
///   "image": "https://cdn.example.com/cat.png",
///   "category_id": 1,
///   "description": "brushing tips",
///   "content": "Brush gently.",
///   "status_id": 2
/// }
/// ```
///
/// `description` is optional and stored as `NULL` when omitted. `date` and
/// `likes_count` are assigned by the store.
///
/// # Errors
///
/// - 400 when `title`, `image`, or `content` is absent/empty or a reference
///   id is absent; the store is never touched. `0` is a valid reference id.
/// - 500 with the connectivity body when the store is unreachable, or with
///   the generic creation body (native error included) otherwise.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<CreatePostResponse>), AppError> {
    let new_post = payload.into_new_post().ok_or(AppError::MissingPostData)?;

    let post = state
        .posts
        .create(new_post)
        .await
        .map_err(AppError::CreatePost)?;

    // The generated row is not echoed to the client; it feeds the log.
    tracing::info!(post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(CreatePostResponse::created())))
}
