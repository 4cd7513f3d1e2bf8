//! # warden-directory
//!
//! The user store behind the [`warden_auth::IdentityDirectory`] boundary,
//! plus the account service that orchestrates registration, login, and the
//! user CRUD surface shared by both front-ends.
//!
//! Two store implementations are provided: SQLite (sqlx) for the server
//! binary, and an in-memory map for tests wiring up the gates without a
//! database.

pub mod accounts;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use accounts::{AccountService, AccountsError};
pub use error::StoreError;
pub use memory::MemoryUserStore;
pub use sqlite::SqliteUserStore;
pub use store::{UserStore, UserUpdate};
