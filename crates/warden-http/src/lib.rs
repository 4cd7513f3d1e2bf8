//! # warden-http
//!
//! The REST front-end: an axum router exposing registration, login, and the
//! authenticated user CRUD surface.
//!
//! The credential gate here is strict about the wire shape (scheme literal
//! `Bearer`, exact case, one separating space) and performs a live
//! existence check against the identity directory on every authenticated
//! request. The RPC front-end deliberately does neither of those two things
//! the same way; both behaviors are pinned by tests.

pub mod error;
pub mod extract;
pub mod gate;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use extract::Caller;
pub use routes::router;
pub use state::AppState;
