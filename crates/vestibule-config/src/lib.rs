#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Environment-sourced configuration for the Vestibule service.
//!
//! Layout: `model.rs` (typed configuration), `error.rs` (startup-fatal
//! validation errors), `loader.rs` (environment parsing).
//!
//! Configuration is read once at startup and passed explicitly into the
//! request-handling layer; nothing here is consulted per request.

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ConfigError, ConfigResult};
pub use model::{AppConfig, SeedIdentity};
