//! Cookie Management Infrastructure
//!
//! Cookie policy shared by every context that hands cookies to the client.
//! Values are percent-encoded on the wire by `axum_extra`'s cookie jar, so a
//! value such as `Bearer <token>` survives the round trip intact.

use axum_extra::extract::cookie::{self, Cookie};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl From<SameSite> for cookie::SameSite {
    fn from(value: SameSite) -> Self {
        match value {
            SameSite::Strict => cookie::SameSite::Strict,
            SameSite::Lax => cookie::SameSite::Lax,
            SameSite::None => cookie::SameSite::None,
        }
    }
}

/// Cookie configuration
///
/// No `Max-Age` is set: cookies live for the browser session and the
/// token inside carries its own expiry.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Build a cookie carrying `value` under this policy
    pub fn build(&self, value: impl Into<String>) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value.into()))
            .path(self.path.clone())
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site.into())
            .build()
    }
}
