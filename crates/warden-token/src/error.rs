//! Error types for credential handling.

use thiserror::Error;

/// Errors that can occur while validating a credential.
///
/// Variants are ordered the way validation runs: structure first, then the
/// declared algorithm, then the signature, then expiry, then claim shape.
/// None of these reach a client verbatim; the transport boundary collapses
/// them to a generic unauthenticated response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The credential is not a structurally valid three-segment token.
    #[error("malformed credential")]
    Malformed,

    /// The header declares an algorithm outside the HMAC family.
    #[error("unsupported signing algorithm: {alg}")]
    UnsupportedAlgorithm { alg: String },

    /// The signature does not verify against the configured secret.
    #[error("invalid signature")]
    InvalidSignature,

    /// The credential's expiry timestamp has passed.
    #[error("credential expired at {expired_at}")]
    Expired { expired_at: i64 },

    /// A required claim is absent or has the wrong type.
    #[error("credential claim {claim:?} missing or malformed")]
    UnknownClaimShape { claim: &'static str },

    /// Failed to create a credential (serialization or signing).
    #[error("failed to issue credential: {0}")]
    IssueFailed(String),
}
