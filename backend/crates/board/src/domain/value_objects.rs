//! Domain Value Objects

use derive_more::Display;
use kernel::id::UserId;
use thiserror::Error;

/// Who is writing: the authenticated user, as the board sees them
///
/// The nickname is copied onto posts and comments at write time.
#[derive(Debug, Clone)]
pub struct Author {
    pub user_id: UserId,
    pub nickname: String,
}

impl From<auth::AuthenticatedUser> for Author {
    fn from(user: auth::AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id,
            nickname: user.nickname.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("text must not be empty or whitespace only")]
pub struct BlankText;

fn non_blank(raw: String) -> Result<String, BlankText> {
    if raw.trim().is_empty() {
        return Err(BlankText);
    }
    Ok(raw)
}

/// Post title (non-blank)
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(raw: impl Into<String>) -> Result<Self, BlankText> {
        non_blank(raw.into()).map(Self)
    }

    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post body (non-blank)
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(raw: impl Into<String>) -> Result<Self, BlankText> {
        non_blank(raw.into()).map(Self)
    }

    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment body (non-blank)
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(raw: impl Into<String>) -> Result<Self, BlankText> {
        non_blank(raw.into()).map(Self)
    }

    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
