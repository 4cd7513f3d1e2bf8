//! The RPC credential gate.

use tonic::metadata::MetadataMap;
use tonic::service::Interceptor;
use tonic::{Request, Status};
use warden_auth::{AuthCore, AuthError, AuthenticatedIdentity};

/// Tonic interceptor guarding every call on the service it wraps.
///
/// Extracts `authorization: <scheme> <credential>` from call metadata
/// (metadata keys are case-insensitive per the transport), accepts the
/// `bearer` scheme in any casing, and validates the credential through the
/// shared auth core. No existence re-check happens here; validation is
/// pure, which is what lets this run as a synchronous interceptor.
#[derive(Clone)]
pub struct AuthInterceptor {
    auth: AuthCore,
}

impl AuthInterceptor {
    pub fn new(auth: AuthCore) -> Self {
        Self { auth }
    }

    fn authenticate(&self, metadata: &MetadataMap) -> Result<AuthenticatedIdentity, AuthError> {
        let credential = extract_bearer(metadata)?;
        self.auth.validate(credential)
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut req: Request<()>) -> Result<Request<()>, Status> {
        match self.authenticate(req.metadata()) {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                Ok(req)
            }
            Err(err) => Err(status_for(&err)),
        }
    }
}

/// Extract the credential from the `authorization` metadata entry.
///
/// Scheme matched case-insensitively against `bearer`, one separating
/// space. Looser than the REST gate's exact-case match; regression tests
/// pin both behaviors.
fn extract_bearer(metadata: &MetadataMap) -> Result<&str, AuthError> {
    let value = metadata
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingOrMalformedCredential)?;

    let mut parts = value.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(credential))
            if scheme.eq_ignore_ascii_case("bearer") && !credential.is_empty() =>
        {
            Ok(credential)
        }
        _ => Err(AuthError::MissingOrMalformedCredential),
    }
}

/// Collapse an auth failure to its transport status.
///
/// The specific kind is logged server-side only; clients see a generic
/// message per status class.
pub fn status_for(err: &AuthError) -> Status {
    tracing::debug!(error = %err, "rpc call rejected by auth");
    match err {
        AuthError::PermissionDenied => Status::permission_denied("permission denied"),
        AuthError::UpstreamUnavailable(_) => Status::internal("internal error"),
        _ => Status::unauthenticated("unauthenticated"),
    }
}
