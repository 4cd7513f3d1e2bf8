//! # warden-grpc
//!
//! The RPC front-end: a tonic `UserService` guarded by the credential
//! interceptor.
//!
//! The interceptor validates every call through the same
//! [`warden_auth::AuthCore`] the REST gate uses, but with two documented
//! differences in wire behavior: the `bearer` scheme is matched
//! case-insensitively, and no directory existence re-check is performed,
//! so a deleted identity keeps working here until its credential expires.
//! Both differences are pinned by regression tests rather than silently
//! normalized.

pub mod caller;
pub mod interceptor;
pub mod service;

pub mod proto {
    tonic::include_proto!("warden.v1");
}

pub use caller::CallerExt;
pub use interceptor::AuthInterceptor;
pub use service::UserGrpcService;
