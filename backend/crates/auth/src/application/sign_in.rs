//! Sign In Use Case
//!
//! Verifies credentials and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    nickname::Nickname,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub nickname: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed session token (goes into both cookie and body)
    pub session_token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<SessionTokenService>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        tokens: Arc<SessionTokenService>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A string that fails nickname validation can never have signed up
        let user = match Nickname::new(input.nickname) {
            Ok(nickname) => self
                .user_repo
                .find_by_nickname(&nickname)
                .await
                .map_err(AuthError::into_sign_in_failure)?,
            Err(_) => None,
        };

        let raw_password = RawPassword::for_sign_in(input.password);
        let pepper = self.config.pepper();

        // Unknown nickname and wrong password must be indistinguishable,
        // in the response and in the time it takes
        let verified = match &user {
            Some(user) => user.password.verify(&raw_password, pepper),
            None => UserPassword::verify_missing(&raw_password, pepper),
        };

        let user = user
            .filter(|_| verified)
            .ok_or(AuthError::InvalidCredentials)?;

        let session_token = self.tokens.issue(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            nickname = %user.nickname,
            "User signed in"
        );

        Ok(SignInOutput { session_token })
    }
}
