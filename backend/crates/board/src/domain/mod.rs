//! Domain Layer
//!
//! Posts, comments, and the persistence interfaces for them.

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{Comment, Post};
pub use value_objects::Author;
