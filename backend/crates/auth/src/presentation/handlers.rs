//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use kernel::json::AppJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticatedUser, SessionTokenService, SignInInput, SignInUseCase, SignUpInput,
    SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    MeResponse, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, UserInfo,
};
use crate::presentation::middleware::AuthMiddlewareState;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<SessionTokenService>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: Arc::new(SessionTokenService::from_config(&config)),
            config: Arc::new(config),
        }
    }

    /// State for `require_auth`, sharing the same store and signing key
    pub fn middleware_state(&self) -> AuthMiddlewareState<R> {
        AuthMiddlewareState {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /users, POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        nickname: req.nickname,
        password: req.password,
        confirm_password: req.confirm_password,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "Sign up completed.".to_string(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /auth, POST /login
///
/// The token goes out twice: as `Authorization=Bearer <token>` cookie and
/// in the JSON body.
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    jar: CookieJar,
    AppJson(req): AppJson<SignInRequest>,
) -> AuthResult<(CookieJar, Json<SignInResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        nickname: req.nickname,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state
        .config
        .cookie_config()
        .build(format!("Bearer {}", output.session_token));

    Ok((
        jar.add(cookie),
        Json(SignInResponse {
            token: output.session_token,
        }),
    ))
}

// ============================================================================
// Current user (requires authentication)
// ============================================================================

/// GET /users/me
pub async fn me(user: AuthenticatedUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: UserInfo {
            nickname: user.nickname.to_string(),
        },
    })
}
