//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, optional pepper)
//! - Signed session tokens (HS256 JWT)
//! - Cookie policy

pub mod cookie;
pub mod password;
pub mod token;
