//! In-memory User Store
//!
//! Used for local development without a database and by the tests.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::nickname::Nickname;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;

        if users.values().any(|existing| existing.nickname == user.nickname) {
            return Err(AuthError::NicknameTaken);
        }

        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_nickname(&self, nickname: &Nickname) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| &user.nickname == nickname)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::{RawPassword, UserPassword};

    fn user(nickname: &str) -> User {
        let nickname = Nickname::new(nickname).unwrap();
        let raw = RawPassword::for_sign_in("wxyz".to_string());
        User::new(nickname, UserPassword::from_raw(&raw, None).unwrap())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let alice = user("alice");
        repo.create(&alice).await.unwrap();

        let by_id = repo.find_by_id(&alice.user_id).await.unwrap().unwrap();
        assert_eq!(by_id.nickname.as_str(), "alice");

        let by_nickname = repo
            .find_by_nickname(&Nickname::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_nickname.user_id, alice.user_id);

        assert!(
            repo.find_by_nickname(&Nickname::new("Alice").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_nickname_rejected_by_store() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice")).await.unwrap();

        let result = repo.create(&user("alice")).await;
        assert!(matches!(result, Err(AuthError::NicknameTaken)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_one_record() {
        let repo = InMemoryUserRepository::new();
        let a = user("racer");
        let b = user("racer");

        let (ra, rb) = tokio::join!(repo.create(&a), repo.create(&b));
        assert!(ra.is_ok() ^ rb.is_ok());
        assert_eq!(repo.len().await, 1);
    }
}
