//! Board Error Types
//!
//! Same contract as the auth errors: `Display` is the client-facing
//! `errorMessage`, and `kind()` picks the status.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Board-specific result type alias
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-specific error variants
#[derive(Debug, Error)]
pub enum BoardError {
    /// Body is not JSON, has the wrong shape, or a required field is blank
    #[error("The data format is invalid.")]
    InvalidPayload,

    #[error("Please enter the comment content.")]
    EmptyComment,

    #[error("The post does not exist.")]
    PostNotFound,

    #[error("The comment does not exist.")]
    CommentNotFound,

    #[error("Only the author can change or delete this.")]
    NotAuthor,

    #[error("The request could not be processed.")]
    Database(#[from] sqlx::Error),
}

impl BoardError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::InvalidPayload | BoardError::EmptyComment => {
                ErrorKind::PreconditionFailed
            }
            BoardError::PostNotFound | BoardError::CommentNotFound => ErrorKind::NotFound,
            BoardError::NotAuthor => ErrorKind::Forbidden,
            BoardError::Database(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            BoardError::Database(e) => {
                tracing::error!(error = ?e, "Board store error");
            }
            BoardError::NotAuthor => {
                tracing::warn!("Write attempt by non-author");
            }
            _ => {
                tracing::debug!(error = %self, "Board error");
            }
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(BoardError::InvalidPayload.to_app_error().status_code(), 412);
        assert_eq!(BoardError::EmptyComment.to_app_error().status_code(), 412);
        assert_eq!(BoardError::PostNotFound.to_app_error().status_code(), 404);
        assert_eq!(BoardError::CommentNotFound.to_app_error().status_code(), 404);
        assert_eq!(BoardError::NotAuthor.to_app_error().status_code(), 403);
    }

    #[test]
    fn test_store_error_is_generic_bad_request() {
        let app = BoardError::Database(sqlx::Error::PoolTimedOut).to_app_error();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "The request could not be processed.");
    }
}
