//! HTTP delivery surface for the Vestibule API.
//!
//! The auth middleware consumes the two-operation authenticator contract and
//! turns verdicts into responses; everything else here is routing, CORS, and
//! problem-details error bodies.

pub mod http;
pub mod state;

pub use http::router::ApiServer;
