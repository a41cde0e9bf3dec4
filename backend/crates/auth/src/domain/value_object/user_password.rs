//! User Password Value Object
//!
//! Sign-up policy for passwords, and the hashed form that is stored.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Policy (sign-up only)
//! - At least [`PASSWORD_MIN_LENGTH`] UTF-16 code units (what a JavaScript
//!   client reports as `length`)
//! - Must not contain the nickname (case-sensitive substring)
//!
//! Sign-in accepts any input and lets hash verification decide.

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
use std::fmt;
use thiserror::Error;

use crate::domain::value_object::nickname::Nickname;

/// Minimum password length (in UTF-16 code units)
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must not contain the nickname")]
    ContainsNickname,
}

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password against the sign-up policy
    ///
    /// Checks run in a fixed order: length first, then the nickname rule.
    pub fn for_sign_up(raw: String, nickname: &Nickname) -> Result<Self, PasswordPolicyError> {
        let clear_text = ClearTextPassword::new(raw);

        let actual = clear_text.utf16_len();
        if actual < PASSWORD_MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: PASSWORD_MIN_LENGTH,
                actual,
            });
        }

        if clear_text.as_str().contains(nickname.as_str()) {
            return Err(PasswordPolicyError::ContainsNickname);
        }

        Ok(Self(clear_text))
    }

    /// Wrap a password presented at sign-in (no policy applied)
    pub fn for_sign_in(raw: String) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    /// Compare against the confirmation field
    pub fn matches(&self, confirmation: &str) -> bool {
        self.0.as_str() == confirmation
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.0.hash(pepper).map(Self)
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc_string).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    /// Same cost as [`verify`](Self::verify), for when there is no user;
    /// always `false`
    pub fn verify_missing(raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        HashedPassword::verify_dummy(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
