//! Nickname Value Object
//!
//! ニックネームはユーザーの公開ハンドルであり、ログイン ID も兼ねる。
//!
//! ## 不変条件
//! - 長さ: 3 文字以上（上限なし）
//! - ASCII 英字（大文字・小文字）と数字のみ
//! - 正規化しない（大文字小文字は区別する）

use derive_more::Display;
use thiserror::Error;

/// Minimum length for a nickname (in characters)
pub const NICKNAME_MIN_LENGTH: usize = 3;

/// Error returned when nickname validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    #[error("Nickname is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("Invalid character '{char}' at position {position}. Only a-z, A-Z, 0-9 are allowed")]
    InvalidCharacter { char: char, position: usize },
}

/// Validated nickname
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(raw: impl Into<String>) -> Result<Self, NicknameError> {
        let raw = raw.into();

        let length = raw.chars().count();
        if length < NICKNAME_MIN_LENGTH {
            return Err(NicknameError::TooShort {
                length,
                min: NICKNAME_MIN_LENGTH,
            });
        }

        if let Some((position, char)) = raw
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            return Err(NicknameError::InvalidCharacter { char, position });
        }

        Ok(Self(raw))
    }

    /// Restore from storage; the value was validated on the way in.
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
