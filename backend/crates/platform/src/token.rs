//! Signed Token Codec
//!
//! HS256 JSON Web Tokens over any serde claims type. Expiry is always
//! enforced (`exp` is a required claim) with zero leeway.

use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(TokenError::Encode)
    }

    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        jsonwebtoken::decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &"HS256")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        exp: u64,
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    #[test]
    fn test_encode_decode() {
        let codec = TokenCodec::new(b"secret");
        let claims = TestClaims {
            sub: "abc".to_string(),
            exp: now() + 60,
        };

        let token = codec.encode(&claims).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded: TestClaims = codec.decode(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = TokenCodec::new(b"secret")
            .encode(&TestClaims {
                sub: "abc".to_string(),
                exp: now() + 60,
            })
            .unwrap();

        let result = TokenCodec::new(b"other").decode::<TestClaims>(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_expired_token() {
        let codec = TokenCodec::new(b"secret");
        let token = codec
            .encode(&TestClaims {
                sub: "abc".to_string(),
                exp: now() - 10,
            })
            .unwrap();

        assert!(matches!(
            codec.decode::<TestClaims>(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_malformed_token() {
        let codec = TokenCodec::new(b"secret");
        assert!(matches!(
            codec.decode::<TestClaims>("not.a.jwt"),
            Err(TokenError::Invalid(_))
        ));
        assert!(matches!(
            codec.decode::<TestClaims>(""),
            Err(TokenError::Invalid(_))
        ));
    }
}
