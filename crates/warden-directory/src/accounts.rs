//! Account service: registration, login, and the user CRUD surface.

use crate::error::StoreError;
use crate::store::{UserStore, UserUpdate};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;
use warden_core::User;
use warden_token::TokenError;

/// Errors from account operations.
#[derive(Debug, Error)]
pub enum AccountsError {
    /// Login failed. Deliberately does not say whether the email or the
    /// password was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user not found")]
    NotFound,

    #[error("email already registered")]
    EmailTaken,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for AccountsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AccountsError::NotFound,
            StoreError::EmailTaken => AccountsError::EmailTaken,
            StoreError::Database(msg) => AccountsError::Store(msg),
        }
    }
}

/// Registration, login, and user CRUD over a [`UserStore`].
///
/// Shared by the REST handlers and the gRPC service so both front-ends run
/// the same business logic. Login mints the credential with the configured
/// TTL; nothing about the token is kept server-side afterwards.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    secret: Arc<str>,
    token_ttl: Duration,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>, secret: impl Into<Arc<str>>, token_ttl: Duration) -> Self {
        Self {
            store,
            secret: secret.into(),
            token_ttl,
        }
    }

    /// Create an account with a freshly hashed password.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountsError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountsError::Hash(e.to_string()))?
            .to_string();

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        self.store.create(&user).await?;
        tracing::info!(user = %user.id, "registered user");
        Ok(user)
    }

    /// Verify credentials and mint a bearer credential for the user.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AccountsError> {
        let user = self
            .store
            .get_by_email(email)
            .await?
            .ok_or(AccountsError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| AccountsError::Hash(e.to_string()))?;
        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AccountsError::InvalidCredentials);
        }

        let token = warden_token::issue(&user.id, &self.secret, self.token_ttl)?;
        tracing::debug!(user = %user.id, "issued credential");
        Ok(token)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, AccountsError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(AccountsError::NotFound)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AccountsError> {
        Ok(self.store.list().await?)
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<(), AccountsError> {
        Ok(self.store.update(id, update).await?)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AccountsError> {
        Ok(self.store.delete(id).await?)
    }

    pub async fn count_users(&self) -> Result<i64, AccountsError> {
        Ok(self.store.count().await?)
    }
}
