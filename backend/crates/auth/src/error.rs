//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! The `Display` text of each variant is the exact client-facing
//! `errorMessage`. Store failures keep their source for logging only.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::nickname::NicknameError;
use crate::domain::value_object::user_password::PasswordPolicyError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Nickname must be at least 3 characters long and contain only letters and digits.")]
    InvalidNickname(#[source] NicknameError),

    #[error("Password must be at least 4 characters long.")]
    PasswordTooShort,

    #[error("Password must not contain the nickname.")]
    PasswordContainsNickname,

    #[error("Password does not match the password confirmation.")]
    PasswordMismatch,

    /// Deliberately says nothing about who owns the nickname
    #[error("Nickname is already in use.")]
    NicknameTaken,

    /// Same message for unknown nickname and wrong password
    #[error("Check your nickname or password.")]
    InvalidCredentials,

    /// No `Authorization` cookie, wrong scheme or empty token
    #[error("Login is required.")]
    LoginRequired,

    /// Token present but rejected, or its user is gone
    #[error("An error occurred with the provided cookie.")]
    InvalidSessionCookie,

    #[error("The request data format is invalid.")]
    Database(#[from] sqlx::Error),

    #[error("Login failed.")]
    SignInFailed(#[source] sqlx::Error),

    #[error("Internal server error.")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidNickname(_)
            | AuthError::PasswordTooShort
            | AuthError::PasswordContainsNickname
            | AuthError::PasswordMismatch
            | AuthError::NicknameTaken
            | AuthError::Database(_)
            | AuthError::SignInFailed(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::LoginRequired | AuthError::InvalidSessionCookie => ErrorKind::Forbidden,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Re-label a store failure that happened while signing in
    pub(crate) fn into_sign_in_failure(self) -> Self {
        match self {
            AuthError::Database(e) => AuthError::SignInFailed(e),
            other => other,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) | AuthError::SignInFailed(e) => {
                tracing::error!(error = ?e, "Auth store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidSessionCookie => {
                tracing::warn!("Rejected session cookie");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<NicknameError> for AuthError {
    fn from(err: NicknameError) -> Self {
        AuthError::InvalidNickname(err)
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        match err {
            PasswordPolicyError::TooShort { .. } => AuthError::PasswordTooShort,
            PasswordPolicyError::ContainsNickname => AuthError::PasswordContainsNickname,
        }
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        for err in [
            AuthError::InvalidNickname(NicknameError::TooShort { length: 1, min: 3 }),
            AuthError::PasswordTooShort,
            AuthError::PasswordContainsNickname,
            AuthError::PasswordMismatch,
            AuthError::NicknameTaken,
        ] {
            assert_eq!(err.to_app_error().status_code(), 400, "{err}");
        }
    }

    #[test]
    fn test_auth_failures() {
        assert_eq!(AuthError::InvalidCredentials.to_app_error().status_code(), 401);
        assert_eq!(AuthError::LoginRequired.to_app_error().status_code(), 403);
        assert_eq!(AuthError::InvalidSessionCookie.to_app_error().status_code(), 403);
    }

    #[test]
    fn test_store_errors_hide_detail() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "The request data format is invalid.");

        let err = AuthError::Database(sqlx::Error::PoolTimedOut).into_sign_in_failure();
        assert!(matches!(err, AuthError::SignInFailed(_)));
        assert_eq!(err.to_app_error().message(), "Login failed.");
    }

    #[test]
    fn test_into_sign_in_failure_keeps_domain_errors() {
        let err = AuthError::InvalidCredentials.into_sign_in_failure();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_password_policy_conversion() {
        let err: AuthError = PasswordPolicyError::TooShort { min: 4, actual: 1 }.into();
        assert!(matches!(err, AuthError::PasswordTooShort));
        let err: AuthError = PasswordPolicyError::ContainsNickname.into();
        assert!(matches!(err, AuthError::PasswordContainsNickname));
    }
}
