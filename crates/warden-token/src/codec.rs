//! Credential issuing and validation.

use crate::claims::Claims;
use crate::error::TokenError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use std::time::Duration;

/// Read the `alg` string a credential's header declares and admit only the
/// symmetric HMAC family.
///
/// The header is parsed by hand rather than through the library so that
/// algorithm names the library's enum cannot represent (`none`, `ES256K`,
/// vendor strings) still surface as `UnsupportedAlgorithm` rather than
/// collapsing into `Malformed`.
fn declared_algorithm(credential: &str) -> Result<Algorithm, TokenError> {
    let segment = credential.split('.').next().unwrap_or_default();
    let raw = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::Malformed)?;
    let header: serde_json::Value =
        serde_json::from_slice(&raw).map_err(|_| TokenError::Malformed)?;
    let alg = header
        .get("alg")
        .and_then(serde_json::Value::as_str)
        .ok_or(TokenError::Malformed)?;
    match alg {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(TokenError::UnsupportedAlgorithm {
            alg: other.to_string(),
        }),
    }
}

/// Issue a credential for `subject`, valid for `ttl` from now.
///
/// The expiry window is an explicit caller decision; there is no hidden
/// library default.
pub fn issue(subject: &str, secret: &str, ttl: Duration) -> Result<String, TokenError> {
    let claims = Claims::new(subject, ttl);
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::IssueFailed(e.to_string()))
}

/// Validate a credential against `secret` and extract its claims.
///
/// Checks run in a fixed order: segment structure, declared algorithm,
/// signature, expiry, claim shape. Pure function over its inputs; safe to
/// call concurrently.
pub fn validate(credential: &str, secret: &str) -> Result<Claims, TokenError> {
    // (a) structural: exactly three dot-separated segments
    if credential.split('.').count() != 3 {
        return Err(TokenError::Malformed);
    }
    // (b) algorithm family, before touching the signature
    let alg = declared_algorithm(credential)?;

    // (c) signature. Expiry is our own claim, checked below, so the
    // library's exp handling is disabled outright.
    let mut validation = Validation::new(alg);
    validation.validate_exp = false;
    validation.set_required_spec_claims::<&str>(&[]);

    let data = decode::<serde_json::Value>(
        credential,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;
    let payload = data.claims;

    // (d) expiry
    let expires_at = payload
        .get("expires_at")
        .and_then(serde_json::Value::as_i64)
        .ok_or(TokenError::UnknownClaimShape {
            claim: "expires_at",
        })?;
    let now = Utc::now().timestamp();
    if now > expires_at {
        return Err(TokenError::Expired {
            expired_at: expires_at,
        });
    }

    // (e) identity claim
    let subject = payload
        .get("subject")
        .and_then(serde_json::Value::as_str)
        .ok_or(TokenError::UnknownClaimShape { claim: "subject" })?;
    let issued_at = payload
        .get("issued_at")
        .and_then(serde_json::Value::as_i64)
        .ok_or(TokenError::UnknownClaimShape { claim: "issued_at" })?;

    Ok(Claims {
        subject: subject.to_string(),
        issued_at,
        expires_at,
    })
}
