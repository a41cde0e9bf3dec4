//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the Auth router for any repository implementation
///
/// `/signup` and `/login` are aliases of `/users` and `/auth`.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let protected = Router::new()
        .route("/users/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(
            state.middleware_state(),
            require_auth::<R>,
        ));

    Router::new()
        .route("/users", post(handlers::sign_up::<R>))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/auth", post(handlers::sign_in::<R>))
        .route("/login", post(handlers::sign_in::<R>))
        .merge(protected)
        .with_state(state)
}
