//! Auth Middleware
//!
//! `require_auth` guards protected routes. On success the resolved
//! [`AuthenticatedUser`] is placed in the request extensions, and handlers
//! take it as an extractor argument.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticateUseCase, AuthenticatedUser, SessionTokenService};
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<SessionTokenService>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session cookie
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = jar
        .get(&state.config.cookie_name)
        .map(|cookie| cookie.value().to_owned());

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone());
    let user = use_case.execute(cookie.as_deref()).await?;

    tracing::debug!(user_id = %user.user_id, "Request authenticated");

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present behind `require_auth`
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::LoginRequired)
    }
}
