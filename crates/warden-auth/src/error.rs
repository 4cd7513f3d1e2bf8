//! Error taxonomy for the authentication core.

use thiserror::Error;
use warden_token::TokenError;

/// Everything that can go wrong between credential extraction and handler
/// execution.
///
/// The taxonomy exists for server-side diagnostics; the transport layers
/// collapse most of it to a generic unauthenticated response. Only
/// `PermissionDenied` (403) and `UpstreamUnavailable` (500) surface
/// distinctly.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential header/metadata, or the scheme/separator is wrong.
    #[error("missing or malformed credential")]
    MissingOrMalformedCredential,

    /// Credential-level failure (structure, algorithm, signature, expiry,
    /// claim shape).
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The credential verified, but the identity no longer exists in the
    /// directory (deleted after issuance).
    #[error("identity {id:?} no longer exists")]
    IdentityNotFound { id: String },

    /// The directory could not be reached to confirm existence.
    #[error("identity directory unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The caller is authenticated but not allowed to touch this resource.
    #[error("permission denied")]
    PermissionDenied,

    /// Identity was read from the request context before any gate ran.
    #[error("no authenticated identity in request context")]
    IdentityMissing,
}
