//! Authenticate Use Case
//!
//! Resolves the `Authorization` cookie value into the user it was issued to.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::session_token::SessionTokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::nickname::Nickname;
use crate::error::{AuthError, AuthResult};

/// The identity resolved for one request
///
/// Handed to downstream handlers through request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub nickname: Nickname,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<SessionTokenService>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<SessionTokenService>) -> Self {
        Self { user_repo, tokens }
    }

    /// `cookie` is the decoded value of the `Authorization` cookie, if any
    ///
    /// A missing or malformed cookie fails before the store is touched.
    pub async fn execute(&self, cookie: Option<&str>) -> AuthResult<AuthenticatedUser> {
        let token = parse_bearer(cookie.unwrap_or_default()).ok_or(AuthError::LoginRequired)?;

        let user_id = self.tokens.verify(token).map_err(|e| {
            tracing::warn!(reason = %e, "Session token rejected");
            AuthError::InvalidSessionCookie
        })?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, user_id = %user_id, "User lookup failed during authentication");
                AuthError::InvalidSessionCookie
            })?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Session token refers to a missing user");
                AuthError::InvalidSessionCookie
            })?;

        Ok(AuthenticatedUser {
            user_id: user.user_id,
            nickname: user.nickname,
        })
    }
}

/// Split `"<scheme> <token>"` on single spaces and keep the token if the
/// scheme is exactly `Bearer` and the token is non-empty.
fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().unwrap_or_default();

    (scheme == "Bearer" && !token.is_empty()).then_some(token)
}
