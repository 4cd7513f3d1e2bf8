//! Typed access to the authenticated caller on an RPC request.

use crate::interceptor::status_for;
use tonic::{Request, Status};
use warden_auth::{AuthError, AuthenticatedIdentity};

/// Accessor for the identity the interceptor attached to this call.
///
/// Fails (collapsed to `unauthenticated` at the boundary) when the
/// interceptor never ran, rather than handing back an empty identity.
pub trait CallerExt {
    fn caller(&self) -> Result<&AuthenticatedIdentity, Status>;
}

impl<T> CallerExt for Request<T> {
    fn caller(&self) -> Result<&AuthenticatedIdentity, Status> {
        self.extensions()
            .get::<AuthenticatedIdentity>()
            .ok_or_else(|| status_for(&AuthError::IdentityMissing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identity_is_unauthenticated() {
        let req = Request::new(());
        let err = req.caller().unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unauthenticated);
    }

    #[test]
    fn test_attached_identity_is_returned() {
        let mut req = Request::new(());
        req.extensions_mut().insert(AuthenticatedIdentity::new("U1"));
        assert_eq!(req.caller().unwrap().id, "U1");
    }
}
