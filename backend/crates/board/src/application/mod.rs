//! Application Layer
//!
//! Use cases for posts and comments.

pub mod comments;
pub mod posts;

pub use comments::CommentUseCase;
pub use posts::PostUseCase;
