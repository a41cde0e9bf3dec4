//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    nickname::Nickname,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub nickname: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Validation order is fixed so the reported error is deterministic:
    /// nickname, password length, nickname-in-password, confirmation, uniqueness.
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        let nickname = Nickname::new(input.nickname)?;

        let raw_password = RawPassword::for_sign_up(input.password, &nickname)?;

        if !raw_password.matches(&input.confirm_password) {
            return Err(AuthError::PasswordMismatch);
        }

        // Friendly early answer; the store's own constraint is what guarantees uniqueness
        if self.user_repo.find_by_nickname(&nickname).await?.is_some() {
            return Err(AuthError::NicknameTaken);
        }

        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(nickname, password);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            nickname = %user.nickname,
            "User signed up"
        );

        Ok(())
    }
}
