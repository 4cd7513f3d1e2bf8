//! Credential claims.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Claims embedded in a credential payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// The identity id this credential was issued for.
    pub subject: String,

    /// Unix timestamp (seconds) the credential was issued at.
    pub issued_at: i64,

    /// Unix timestamp (seconds) after which the credential is rejected.
    pub expires_at: i64,
}

impl Claims {
    /// Build claims for `subject` expiring `ttl` from now.
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        Self {
            subject: subject.into(),
            issued_at: now,
            expires_at: now + ttl.as_secs() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_window() {
        let claims = Claims::new("u1", Duration::from_secs(3600));
        assert_eq!(claims.expires_at - claims.issued_at, 3600);
        assert!(claims.issued_at <= Utc::now().timestamp());
    }
}
