//! Post API endpoints.

use axum::extract::State;

use super::{success, ApiResult, PostId, PostPayload};
use crate::errors::AppError;
use crate::models::Post;
use crate::validation::parse_post_input;
use crate::AppState;

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}

/// GET /api/posts - List all posts.
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Vec<Post>> {
    success(state.repo.list_posts().await)
}

/// GET /api/posts/:id - Get a single post.
pub async fn get_post(State(state): State<AppState>, PostId(id): PostId) -> ApiResult<Post> {
    match state.repo.get_post(id).await {
        Some(post) => success(post),
        None => Err(not_found(id)),
    }
}

/// POST /api/posts - Create a new post.
pub async fn create_post(
    State(state): State<AppState>,
    PostPayload(data): PostPayload,
) -> ApiResult<Post> {
    let input = parse_post_input(&data).map_err(AppError::invalid)?;
    let post = state.repo.create_post(&input).await?;
    success(post)
}

/// PUT /api/posts/:id - Update author, title and content of a post.
///
/// A missing post is reported before the body is validated.
pub async fn update_post(
    State(state): State<AppState>,
    PostId(id): PostId,
    PostPayload(data): PostPayload,
) -> ApiResult<Post> {
    if state.repo.get_post(id).await.is_none() {
        return Err(not_found(id));
    }

    let input = parse_post_input(&data).map_err(AppError::invalid)?;
    match state.repo.update_post(id, &input).await? {
        Some(post) => success(post),
        None => Err(not_found(id)),
    }
}

/// DELETE /api/posts/:id - Delete a post.
pub async fn delete_post(State(state): State<AppState>, PostId(id): PostId) -> ApiResult<()> {
    if state.repo.delete_post(id).await? {
        success(())
    } else {
        Err(not_found(id))
    }
}

/// POST /api/posts/:id/like - Add one like to a post.
pub async fn like_post(State(state): State<AppState>, PostId(id): PostId) -> ApiResult<Post> {
    match state.repo.like_post(id).await? {
        Some(post) => success(post),
        None => Err(not_found(id)),
    }
}
