use async_trait::async_trait;

use planner_core::{NewUser, User};

use crate::error::StoreError;

/// Storage abstraction for users.
///
/// Implementations enforce the email uniqueness invariant and surface a
/// violation as `StoreError::Duplicate`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look up a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
