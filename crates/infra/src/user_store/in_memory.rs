use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use planner_core::{NewUser, User, UserId};

use super::r#trait::UserStore;
use crate::error::StoreError;

/// In-memory user store, keyed by email.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Database("lock poisoned".to_string()))?;

        if users.contains_key(&user.email) {
            return Err(StoreError::Duplicate(format!(
                "user email already exists: {}",
                user.email
            )));
        }

        let stored = User {
            id: UserId::new(),
            email: user.email.clone(),
            password_hash: user.password_hash,
        };
        users.insert(user.email, stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Database("lock poisoned".to_string()))?;
        Ok(users.get(email).cloned())
    }
}
