//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{nickname::Nickname, user_password::UserPassword};

/// User entity
///
/// Created at sign-up and never updated afterwards.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, doubles as the login identifier
    pub nickname: Nickname,
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(nickname: Nickname, password: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            nickname,
            password,
            created_at: Utc::now(),
        }
    }
}
