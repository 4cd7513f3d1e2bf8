//! # warden-core
//!
//! Shared configuration and the `User` domain model for the Warden identity
//! service. Everything here is plain data; the auth core, stores, and the
//! two front-ends all build on these types.

pub mod config;
pub mod user;

pub use config::{AppConfig, AuthConfig, ServerConfig, load_config};
pub use user::User;
