//! The user store trait.

use crate::error::StoreError;
use async_trait::async_trait;
use warden_core::User;

/// Fields that can change on an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// CRUD over stored users.
///
/// Absence on reads is `Ok(None)`; absence on mutations is
/// `Err(StoreError::NotFound)` so callers don't have to re-read to learn
/// whether anything matched.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn update(&self, id: &str, update: &UserUpdate) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn count(&self) -> Result<i64, StoreError>;
}
