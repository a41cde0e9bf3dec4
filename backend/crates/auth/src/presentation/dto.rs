//! API DTOs (Data Transfer Objects)
//!
//! Missing string fields deserialize as `""` so that the domain validation,
//! not serde, decides which `errorMessage` the client sees.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub message: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub token: String,
}

// ============================================================================
// Current user
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub nickname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_camel_case() {
        let json = r#"{"nickname":"abc1","password":"wxyz","confirmPassword":"wxyz"}"#;
        let req: SignUpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.nickname, "abc1");
        assert_eq!(req.confirm_password, "wxyz");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: SignUpRequest = serde_json::from_str(r#"{"nickname":"abc1"}"#).unwrap();
        assert_eq!(req.password, "");
        assert_eq!(req.confirm_password, "");

        let req: SignInRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.nickname, "");
    }

    #[test]
    fn test_me_response_shape() {
        let response = MeResponse {
            user: UserInfo {
                nickname: "abc1".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "user": { "nickname": "abc1" } })
        );
    }
}
