//! Typed access to the authenticated caller.

use crate::error::ApiError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use warden_auth::{AuthError, AuthenticatedIdentity};

/// Extractor for the identity the gate attached to this request.
///
/// Fails with `IdentityMissing` when no gate ran first: a handler that
/// requires an identity on an unguarded route is a wiring bug, not an
/// anonymous request.
#[derive(Debug, Clone)]
pub struct Caller(pub AuthenticatedIdentity);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .map(Caller)
            .ok_or(ApiError::Auth(AuthError::IdentityMissing))
    }
}
