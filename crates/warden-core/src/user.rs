//! The `User` domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user account.
///
/// The password hash never leaves the server; it is skipped on
/// serialization so handlers can return `User` values directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
