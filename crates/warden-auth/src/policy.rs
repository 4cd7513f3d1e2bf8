//! Self-access policy.

use crate::error::AuthError;
use crate::identity::AuthenticatedIdentity;

/// Allow a caller to act on a resource only when it is their own record.
///
/// Applied by handlers exposing a single identity's own resource (e.g.
/// "fetch my record"). Collection-wide and administrative handlers are
/// plain business logic and are not gated here.
pub fn authorize_self_access(
    caller: &AuthenticatedIdentity,
    resource_id: &str,
) -> Result<(), AuthError> {
    if caller.id == resource_id {
        Ok(())
    } else {
        tracing::debug!(
            caller = %caller.id,
            resource = %resource_id,
            "self-access denied"
        );
        Err(AuthError::PermissionDenied)
    }
}
