//! HTTP surface modules (router, middleware, handlers).

/// Authentication middleware and request extensions.
pub mod auth;
/// Shared constants for HTTP surfaces.
pub mod constants;
/// Problem response helpers and error types.
pub mod errors;
/// Router construction and server host.
pub mod router;
/// Status and identity endpoints.
pub mod status;
