//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign up with nickname + password (+ confirmation)
//! - Sign in issuing a signed, stateless session token
//! - Cookie-based authentication middleware for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - HS256 session tokens carrying only the user id, with expiry
//! - Nickname uniqueness enforced by the store itself

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{AuthenticatedUser, SessionTokenService};
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::auth_router;
pub use presentation::{AuthAppState, AuthMiddlewareState, require_auth};
