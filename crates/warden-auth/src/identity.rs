//! The authenticated-identity value carried through a request.

/// The result of a successful credential validation.
///
/// Immutable, request-scoped, never persisted. Whichever gate processed the
/// request attaches exactly one of these to the request's extensions;
/// downstream code reads it through a typed accessor that fails with
/// [`crate::AuthError::IdentityMissing`] instead of silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    /// The identity id taken from the credential's `subject` claim.
    pub id: String,
}

impl AuthenticatedIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
