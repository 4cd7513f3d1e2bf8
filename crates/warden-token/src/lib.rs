//! # warden-token
//!
//! Credential issuing and validation for the Warden identity service.
//!
//! A credential is a compact JWS: three dot-separated base64url segments
//! (header, claims, signature), signed with a symmetric HMAC key. The codec
//! is pure and stateless; both front-ends validate every request through it
//! without any server-held session state.
//!
//! The signing algorithm is restricted to the HMAC family (HS256/384/512).
//! Any other declared algorithm is rejected before the signature is checked,
//! which closes the algorithm-confusion hole where an attacker swaps the
//! header `alg` to trick the verifier into using the wrong key type.

pub mod claims;
pub mod codec;
pub mod error;

pub use claims::Claims;
pub use codec::{issue, validate};
pub use error::TokenError;
