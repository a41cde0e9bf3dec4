//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).

use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";
const MIN_TOKEN_SECRET_LEN: usize = 32;

pub struct ServerConfig {
    pub port: u16,
    /// `None` selects the in-memory stores
    pub database_url: Option<String>,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `development` relaxes the secret and cookie requirements
    pub fn from_lookup(
        get: impl Fn(&str) -> Option<String>,
        development: bool,
    ) -> anyhow::Result<Self> {
        let port = match get("PORT") {
            Some(raw) => raw.parse().with_context(|| format!("invalid PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let database_url = get("DATABASE_URL").filter(|url| !url.is_empty());

        Ok(Self {
            port,
            database_url,
            frontend_origins,
            auth: auth_config(&get, development)?,
        })
    }
}

fn auth_config(
    get: &impl Fn(&str) -> Option<String>,
    development: bool,
) -> anyhow::Result<AuthConfig> {
    let mut config = match get("TOKEN_SECRET") {
        Some(secret_b64) => {
            let token_secret = general_purpose::STANDARD
                .decode(secret_b64.trim())
                .context("TOKEN_SECRET must be base64")?;
            if token_secret.len() < MIN_TOKEN_SECRET_LEN {
                bail!("TOKEN_SECRET must decode to at least {MIN_TOKEN_SECRET_LEN} bytes");
            }
            AuthConfig {
                token_secret,
                ..AuthConfig::default()
            }
        }
        None if development => {
            tracing::warn!("TOKEN_SECRET not set, using a random per-process secret");
            AuthConfig::with_random_secret()
        }
        None => bail!("TOKEN_SECRET must be set in production"),
    };

    if let Some(raw) = get("TOKEN_TTL_SECS") {
        let secs: u64 = raw
            .parse()
            .with_context(|| format!("invalid TOKEN_TTL_SECS: {raw}"))?;
        config.token_ttl = Duration::from_secs(secs);
    }

    config.password_pepper = get("PASSWORD_PEPPER")
        .filter(|pepper| !pepper.is_empty())
        .map(String::into_bytes);

    config.cookie_secure = match get("COOKIE_SECURE") {
        Some(raw) => parse_bool(&raw).with_context(|| format!("invalid COOKIE_SECURE: {raw}"))?,
        None => !development,
    };

    Ok(config)
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("expected a boolean"),
    }
}
