//! Error types for configuration operations.

use thiserror::Error;
use vestibule_auth::ExclusionError;

/// Primary error type for configuration operations.
///
/// Every variant is startup-fatal; request-scoped failures never surface
/// through this type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bind address value was invalid.
    #[error("invalid bind address '{value}'")]
    InvalidBindAddr {
        /// Bind address payload assembled from the environment.
        value: String,
    },
    /// Exclusion entry failed validation.
    #[error("invalid exclusion entry '{value}'")]
    InvalidExclusion {
        /// Offending entry text.
        value: String,
        /// Validation failure detail.
        source: ExclusionError,
    },
    /// Seed identity was not in `identifier:secret` form.
    ///
    /// The offending value is identified by position, not content, so secret
    /// material never reaches logs.
    #[error("seed identity at position {position} must be 'identifier:secret'")]
    InvalidIdentity {
        /// Zero-based position in the configured list.
        position: usize,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
