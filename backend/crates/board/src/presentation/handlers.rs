//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use kernel::id::Id;
use kernel::json::AppJson;
use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::application::{CommentUseCase, PostUseCase};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_objects::Author;
use crate::error::{BoardError, BoardResult};
use crate::presentation::dto::{
    CommentListResponse, CommentRequest, MessageResponse, PostListResponse, PostRequest,
    PostResponse,
};

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardAppState<B>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<B>,
}

/// Unparseable or wrongly typed bodies are a 412 here, not a 400
fn payload<T>(body: Result<AppJson<T>, AppError>) -> BoardResult<T> {
    body.map(|AppJson(value)| value).map_err(|e| {
        tracing::debug!(error = %e, "Rejected board payload");
        BoardError::InvalidPayload
    })
}

/// A path id that is not a UUID cannot name an existing row
fn parse_id<T>(raw: &str, not_found: BoardError) -> BoardResult<Id<T>> {
    raw.parse().map_err(|_| not_found)
}

// ============================================================================
// Posts
// ============================================================================

/// GET /posts
pub async fn list_posts<B>(
    State(state): State<BoardAppState<B>>,
) -> BoardResult<Json<PostListResponse>>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let posts = PostUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(PostListResponse {
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}

/// POST /posts
pub async fn create_post<B>(
    State(state): State<BoardAppState<B>>,
    user: AuthenticatedUser,
    body: Result<AppJson<PostRequest>, AppError>,
) -> BoardResult<(StatusCode, Json<MessageResponse>)>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let req = payload(body)?;
    let author = Author::from(user);

    PostUseCase::new(state.repo.clone())
        .create(&author, req.title, req.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Post created.")),
    ))
}

/// GET /posts/{postId}
pub async fn get_post<B>(
    State(state): State<BoardAppState<B>>,
    Path(post_id): Path<String>,
) -> BoardResult<Json<PostResponse>>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_id(&post_id, BoardError::PostNotFound)?;
    let post = PostUseCase::new(state.repo.clone()).get(&post_id).await?;

    Ok(Json(PostResponse { post: post.into() }))
}

/// PUT /posts/{postId}
pub async fn update_post<B>(
    State(state): State<BoardAppState<B>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
    body: Result<AppJson<PostRequest>, AppError>,
) -> BoardResult<Json<MessageResponse>>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let req = payload(body)?;
    let post_id = parse_id(&post_id, BoardError::PostNotFound)?;
    let author = Author::from(user);

    PostUseCase::new(state.repo.clone())
        .update(&author, &post_id, req.title, req.content)
        .await?;

    Ok(Json(MessageResponse::new("Post updated.")))
}

/// DELETE /posts/{postId}
pub async fn delete_post<B>(
    State(state): State<BoardAppState<B>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> BoardResult<Json<MessageResponse>>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_id(&post_id, BoardError::PostNotFound)?;
    let author = Author::from(user);

    PostUseCase::new(state.repo.clone())
        .delete(&author, &post_id)
        .await?;

    Ok(Json(MessageResponse::new("Post deleted.")))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /posts/{postId}/comments
pub async fn list_comments<B>(
    State(state): State<BoardAppState<B>>,
    Path(post_id): Path<String>,
) -> BoardResult<Json<CommentListResponse>>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_id(&post_id, BoardError::PostNotFound)?;
    let comments = CommentUseCase::new(state.repo.clone(), state.repo.clone())
        .list(&post_id)
        .await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(Into::into).collect(),
    }))
}

/// POST /posts/{postId}/comments
pub async fn create_comment<B>(
    State(state): State<BoardAppState<B>>,
    user: AuthenticatedUser,
    Path(post_id): Path<String>,
    body: Result<AppJson<CommentRequest>, AppError>,
) -> BoardResult<(StatusCode, Json<MessageResponse>)>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let req = payload(body)?;
    let post_id = parse_id(&post_id, BoardError::PostNotFound)?;
    let author = Author::from(user);

    CommentUseCase::new(state.repo.clone(), state.repo.clone())
        .create(&author, &post_id, req.comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Comment created.")),
    ))
}

/// PUT /posts/{postId}/comments/{commentId}
pub async fn update_comment<B>(
    State(state): State<BoardAppState<B>>,
    user: AuthenticatedUser,
    Path((post_id, comment_id)): Path<(String, String)>,
    body: Result<AppJson<CommentRequest>, AppError>,
) -> BoardResult<Json<MessageResponse>>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let req = payload(body)?;
    let post_id = parse_id(&post_id, BoardError::PostNotFound)?;
    let comment_id = parse_id(&comment_id, BoardError::CommentNotFound)?;
    let author = Author::from(user);

    CommentUseCase::new(state.repo.clone(), state.repo.clone())
        .update(&author, &post_id, &comment_id, req.comment)
        .await?;

    Ok(Json(MessageResponse::new("Comment updated.")))
}

/// DELETE /posts/{postId}/comments/{commentId}
pub async fn delete_comment<B>(
    State(state): State<BoardAppState<B>>,
    user: AuthenticatedUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> BoardResult<Json<MessageResponse>>
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_id(&post_id, BoardError::PostNotFound)?;
    let comment_id = parse_id(&comment_id, BoardError::CommentNotFound)?;
    let author = Author::from(user);

    CommentUseCase::new(state.repo.clone(), state.repo.clone())
        .delete(&author, &post_id, &comment_id)
        .await?;

    Ok(Json(MessageResponse::new("Comment deleted.")))
}
