//! # warden-auth
//!
//! The shared authentication core behind both Warden front-ends.
//!
//! The REST and RPC gates are thin wire adapters; everything after
//! credential extraction funnels through [`AuthCore::validate_and_resolve`]
//! so the two protocols cannot drift apart on validation semantics. The one
//! sanctioned difference between them, whether the identity's continued
//! existence is re-checked against the directory, is an explicit flag on
//! that call, not a second implementation.

pub mod core;
pub mod directory;
pub mod error;
pub mod identity;
pub mod policy;

pub use self::core::AuthCore;
pub use directory::{DirectoryError, IdentityDirectory};
pub use error::AuthError;
pub use identity::AuthenticatedIdentity;
pub use policy::authorize_self_access;
