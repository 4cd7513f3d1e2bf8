//! Store error types.

use thiserror::Error;

/// Errors from a `UserStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed user does not exist.
    #[error("user not found")]
    NotFound,

    /// A uniqueness constraint was violated (duplicate email).
    #[error("email already registered")]
    EmailTaken,

    /// The backing store failed.
    #[error("store error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return StoreError::EmailTaken;
            }
        }
        StoreError::Database(e.to_string())
    }
}
