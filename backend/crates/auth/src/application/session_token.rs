//! Session Token Service
//!
//! Issues and verifies the stateless session token. The token is a signed
//! JWT whose only payload is the user id; there is no server-side session
//! record and no revocation.

use std::time::Duration;

use chrono::Utc;
use kernel::id::UserId;
use platform::token::{TokenCodec, TokenError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct SessionTokenService {
    codec: TokenCodec,
    ttl: Duration,
}

impl SessionTokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            codec: TokenCodec::new(secret),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_secret, config.token_ttl)
    }

    /// Sign a token for `user_id`
    pub fn issue(&self, user_id: &UserId) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);

        let claims = SessionClaims {
            user_id: *user_id.as_uuid(),
            iat: now,
            exp: now.saturating_add(ttl),
        };

        self.codec
            .encode(&claims)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Check signature and expiry, and return the embedded user id
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        self.codec
            .decode::<SessionClaims>(token)
            .map(|claims| UserId::from_uuid(claims.user_id))
    }
}
