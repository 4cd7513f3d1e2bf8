//! The narrow boundary to whatever stores identities.

use async_trait::async_trait;
use thiserror::Error;
use warden_core::User;

/// A directory lookup failure that is not "identity absent".
///
/// Absence is modeled as `Ok(None)`; this error means the backing store
/// itself misbehaved and the request should fail as a server fault.
#[derive(Debug, Error)]
#[error("directory error: {0}")]
pub struct DirectoryError(pub String);

/// Resolves identities by id.
///
/// The auth core only ever asks "does this identity still exist"; it knows
/// nothing about the storage technology behind the trait. The REST gate
/// uses this to reject still-unexpired credentials for identities deleted
/// after issuance.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, DirectoryError>;
}
