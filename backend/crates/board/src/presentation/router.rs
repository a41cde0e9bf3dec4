//! Board Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::{AuthMiddlewareState, UserRepository, require_auth};

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::presentation::handlers::{self, BoardAppState};

/// Create the Board router
///
/// Reads are public; writes sit behind `require_auth`, sharing the user
/// store and signing key of the auth router.
pub fn board_router<B, R>(repo: B, auth: AuthMiddlewareState<R>) -> Router
where
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = BoardAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/posts", get(handlers::list_posts::<B>))
        .route("/posts/{postId}", get(handlers::get_post::<B>))
        .route("/posts/{postId}/comments", get(handlers::list_comments::<B>));

    let protected = Router::new()
        .route("/posts", post(handlers::create_post::<B>))
        .route(
            "/posts/{postId}",
            put(handlers::update_post::<B>).delete(handlers::delete_post::<B>),
        )
        .route(
            "/posts/{postId}/comments",
            post(handlers::create_comment::<B>),
        )
        .route(
            "/posts/{postId}/comments/{commentId}",
            put(handlers::update_comment::<B>).delete(handlers::delete_comment::<B>),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_auth::<R>));

    public.merge(protected).with_state(state)
}
