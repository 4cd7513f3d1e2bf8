//! In-memory user store.

use crate::error::StoreError;
use crate::store::{UserStore, UserUpdate};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use warden_auth::{DirectoryError, IdentityDirectory};
use warden_core::User;

/// A `HashMap`-backed store.
///
/// Used by tests and small deployments; semantics match the SQLite store,
/// including the email uniqueness constraint.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().expect("user map poisoned");
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::EmailTaken);
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().expect("user map poisoned").get(id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .expect("user map poisoned")
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update(&self, id: &str, update: &UserUpdate) -> Result<(), StoreError> {
        let mut users = self.users.write().expect("user map poisoned");
        let user = users.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(email) = &update.email {
            user.email = email.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.users
            .write()
            .expect("user map poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self
            .users
            .read()
            .expect("user map poisoned")
            .values()
            .cloned()
            .collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.users.read().expect("user map poisoned").len() as i64)
    }
}

#[async_trait]
impl IdentityDirectory for MemoryUserStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, DirectoryError> {
        UserStore::get_by_id(self, id)
            .await
            .map_err(|e| DirectoryError(e.to_string()))
    }
}
