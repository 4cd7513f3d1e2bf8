//! The REST credential gate.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use warden_auth::AuthError;

/// Axum middleware guarding the authenticated routes.
///
/// Reads the `Authorization` header, validates the credential through the
/// shared auth core, re-confirms the identity still exists in the
/// directory, and attaches the resulting identity to request extensions.
/// The directory lookup runs inside this request's future, so client
/// disconnects abandon it.
pub async fn require_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credential = extract_bearer(req.headers())?;
    let identity = state.auth.validate_and_resolve(credential, true).await?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extract the credential from `Authorization: Bearer <credential>`.
///
/// Scheme literal `Bearer`, exact case, exactly one separating space.
/// Anything else is a malformed credential, including the lowercase
/// `bearer` the RPC transport tolerates.
fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingOrMalformedCredential)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(credential), None) if !credential.is_empty() => Ok(credential),
        _ => Err(AuthError::MissingOrMalformedCredential),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_well_formed_header() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            extract_bearer(&HeaderMap::new()).unwrap_err(),
            AuthError::MissingOrMalformedCredential
        ));
    }

    #[test]
    fn test_lowercase_scheme_rejected() {
        // Exact-case scheme match; `bearer` and `BEARER` are rejected here
        // even though the RPC gate accepts them.
        let headers = headers_with("bearer abc.def.ghi");
        assert!(extract_bearer(&headers).is_err());
    }

    #[test]
    fn test_separator_deviations_rejected() {
        for value in [
            "Bearer",
            "Bearer ",
            "Bearer  abc.def.ghi",
            "Bearer abc def",
            "Bearer abc.def.ghi ",
            "Basic abc.def.ghi",
        ] {
            assert!(
                extract_bearer(&headers_with(value)).is_err(),
                "accepted {value:?}"
            );
        }
    }
}
