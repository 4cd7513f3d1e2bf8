//! The shared validation core both gates call into.

use crate::directory::IdentityDirectory;
use crate::error::AuthError;
use crate::identity::AuthenticatedIdentity;
use std::sync::Arc;

/// Validates credentials and (optionally) re-confirms the identity still
/// exists in the directory.
///
/// One instance is shared by the REST and RPC gates so the two protocols
/// run identical validation. The only stateful member is the directory
/// handle; validation itself is pure, so concurrent requests need no
/// coordination.
#[derive(Clone)]
pub struct AuthCore {
    secret: Arc<str>,
    directory: Arc<dyn IdentityDirectory>,
}

impl AuthCore {
    pub fn new(secret: impl Into<Arc<str>>, directory: Arc<dyn IdentityDirectory>) -> Self {
        Self {
            secret: secret.into(),
            directory,
        }
    }

    /// Validate a credential without touching the directory.
    ///
    /// This is the whole of what the RPC gate does, and the first half of
    /// what the REST gate does.
    pub fn validate(&self, credential: &str) -> Result<AuthenticatedIdentity, AuthError> {
        let claims = warden_token::validate(credential, &self.secret)?;
        Ok(AuthenticatedIdentity::new(claims.subject))
    }

    /// Validate a credential and, when `existence_check` is set, confirm
    /// the identity still exists in the directory.
    ///
    /// The directory lookup runs inside the caller's request future, so a
    /// cancelled request abandons the outstanding check instead of
    /// completing authentication after the caller gave up.
    pub async fn validate_and_resolve(
        &self,
        credential: &str,
        existence_check: bool,
    ) -> Result<AuthenticatedIdentity, AuthError> {
        let identity = self.validate(credential)?;

        if existence_check {
            match self.directory.get_by_id(&identity.id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    return Err(AuthError::IdentityNotFound {
                        id: identity.id.clone(),
                    });
                }
                Err(e) => return Err(AuthError::UpstreamUnavailable(e.to_string())),
            }
        }

        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryError;
    use async_trait::async_trait;
    use std::time::Duration;
    use warden_core::User;

    const SECRET: &str = "core-test-secret";

    /// Directory stub: one known user, optionally failing outright.
    struct StubDirectory {
        known_id: Option<String>,
        failing: bool,
    }

    #[async_trait]
    impl IdentityDirectory for StubDirectory {
        async fn get_by_id(&self, id: &str) -> Result<Option<User>, DirectoryError> {
            if self.failing {
                return Err(DirectoryError("connection refused".into()));
            }
            Ok(self.known_id.as_deref().filter(|k| *k == id).map(|k| User {
                id: k.to_string(),
                name: "Stub".into(),
                email: "stub@example.com".into(),
                password_hash: String::new(),
                created_at: chrono::Utc::now(),
            }))
        }
    }

    fn core(known_id: Option<&str>, failing: bool) -> AuthCore {
        AuthCore::new(
            SECRET,
            Arc::new(StubDirectory {
                known_id: known_id.map(str::to_string),
                failing,
            }),
        )
    }

    #[tokio::test]
    async fn test_resolve_with_existing_identity() {
        let token = warden_token::issue("U1", SECRET, Duration::from_secs(60)).unwrap();
        let identity = core(Some("U1"), false)
            .validate_and_resolve(&token, true)
            .await
            .unwrap();
        assert_eq!(identity.id, "U1");
    }

    #[tokio::test]
    async fn test_deleted_identity_rejected_when_checking() {
        let token = warden_token::issue("U1", SECRET, Duration::from_secs(60)).unwrap();
        let err = core(None, false)
            .validate_and_resolve(&token, true)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::IdentityNotFound { id } if id == "U1"));
    }

    #[tokio::test]
    async fn test_deleted_identity_accepted_without_check() {
        // The documented REST/RPC asymmetry: with the existence check off, a
        // still-unexpired credential for a deleted identity passes.
        let token = warden_token::issue("U1", SECRET, Duration::from_secs(60)).unwrap();
        let identity = core(None, false)
            .validate_and_resolve(&token, false)
            .await
            .unwrap();
        assert_eq!(identity.id, "U1");
    }

    #[tokio::test]
    async fn test_directory_failure_is_upstream_unavailable() {
        let token = warden_token::issue("U1", SECRET, Duration::from_secs(60)).unwrap();
        let err = core(Some("U1"), true)
            .validate_and_resolve(&token, true)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_bad_token_never_reaches_directory() {
        // A failing directory would surface as UpstreamUnavailable; a token
        // error must win because validation runs first.
        let err = core(Some("U1"), true)
            .validate_and_resolve("x.y.z", true)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Token(_)));
    }
}
