//! Board (Posts & Comments) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reading is public. Writing goes through `auth::require_auth`, and only
//! the author of a post or comment may change or delete it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::repository::{CommentRepository, PostRepository};
pub use error::{BoardError, BoardResult};
pub use infra::{InMemoryBoardRepository, PgBoardRepository};
pub use presentation::router::board_router;
