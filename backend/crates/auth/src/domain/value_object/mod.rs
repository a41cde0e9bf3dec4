//! Value Object Module

pub mod nickname;
pub mod user_password;
