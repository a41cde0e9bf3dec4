//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::nickname::Nickname;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    ///
    /// Implementations must enforce nickname uniqueness themselves and
    /// return [`AuthError::NicknameTaken`](crate::error::AuthError::NicknameTaken)
    /// on a duplicate, even when two sign-ups race.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by nickname (exact, case-sensitive)
    async fn find_by_nickname(&self, nickname: &Nickname) -> AuthResult<Option<User>>;
}
