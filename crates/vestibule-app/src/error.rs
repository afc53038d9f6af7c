//! # Design
//!
//! - Centralize application-level errors for the bootstrap path.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or validation failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: vestibule_config::ConfigError,
    },
    /// Credential store seeding failed.
    #[error("credential store operation failed")]
    Store {
        /// Operation identifier.
        operation: &'static str,
        /// Source store error.
        source: vestibule_auth::StoreError,
    },
    /// Telemetry initialisation failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: anyhow::Error,
    },
    /// API server operations failed.
    #[error("api server operation failed")]
    ApiServer {
        /// Operation identifier.
        operation: &'static str,
        /// Source API server error.
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wrap a configuration error with its operation identifier.
    #[must_use]
    pub const fn config(operation: &'static str, source: vestibule_config::ConfigError) -> Self {
        Self::Config { operation, source }
    }

    /// Wrap a store error with its operation identifier.
    #[must_use]
    pub const fn store(operation: &'static str, source: vestibule_auth::StoreError) -> Self {
        Self::Store { operation, source }
    }

    /// Wrap a telemetry error with its operation identifier.
    #[must_use]
    pub const fn telemetry(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Telemetry { operation, source }
    }

    /// Wrap an API server error with its operation identifier.
    #[must_use]
    pub const fn api_server(operation: &'static str, source: anyhow::Error) -> Self {
        Self::ApiServer { operation, source }
    }
}
