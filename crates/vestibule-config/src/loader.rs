//! Environment parsing for the application configuration.
//!
//! `from_env` is a thin shell over pure parsing helpers so validation is
//! testable without mutating process-global environment state.

use std::net::SocketAddr;

use tracing::warn;
use vestibule_auth::{ExclusionEntry, ExclusionList, StrategyKind};

use crate::error::{ConfigError, ConfigResult};
use crate::model::{AppConfig, SeedIdentity};

/// Strategy selector, e.g. `basic` or `none`.
pub const ENV_AUTH: &str = "VESTIBULE_AUTH";
/// Comma-separated exclusion entries, e.g. `/api/v1/status,/admin/*`.
pub const ENV_EXEMPT_PATHS: &str = "VESTIBULE_EXEMPT_PATHS";
/// Listener host; defaults to `0.0.0.0`.
pub const ENV_HOST: &str = "VESTIBULE_HOST";
/// Listener port; defaults to `5000`.
pub const ENV_PORT: &str = "VESTIBULE_PORT";
/// Comma-separated `identifier:secret` seed pairs.
pub const ENV_IDENTITIES: &str = "VESTIBULE_IDENTITIES";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "5000";

impl AppConfig {
    /// Assemble and validate configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the bind address, an exclusion entry, or a seed
    /// identity is malformed. These are the only fatal error conditions in
    /// the service; startup must abort on them.
    pub fn from_env() -> ConfigResult<Self> {
        let strategy = std::env::var(ENV_AUTH)
            .map(|value| StrategyKind::parse(&value))
            .unwrap_or_default();

        let exclusions = parse_exclusions(&env_or_default(ENV_EXEMPT_PATHS, ""))?;
        if strategy == StrategyKind::Basic && exclusions.is_empty() {
            warn!("basic auth enabled with an empty exclusion list; every path requires credentials");
        }

        let host = env_or_default(ENV_HOST, DEFAULT_HOST);
        let port = env_or_default(ENV_PORT, DEFAULT_PORT);
        let bind_addr = parse_bind_addr(&host, &port)?;

        let seed_identities = parse_seed_identities(&env_or_default(ENV_IDENTITIES, ""))?;

        Ok(Self {
            bind_addr,
            strategy,
            exclusions,
            seed_identities,
        })
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the comma-separated exclusion list.
///
/// # Errors
///
/// Returns an error when any entry fails validation.
pub fn parse_exclusions(raw: &str) -> ConfigResult<ExclusionList> {
    let entries = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            ExclusionEntry::parse(entry).map_err(|source| ConfigError::InvalidExclusion {
                value: entry.to_string(),
                source,
            })
        })
        .collect::<ConfigResult<Vec<_>>>()?;
    Ok(ExclusionList::from_entries(entries))
}

/// Combine host and port into a socket address.
///
/// # Errors
///
/// Returns an error when the combination does not parse as a socket address.
pub fn parse_bind_addr(host: &str, port: &str) -> ConfigResult<SocketAddr> {
    let candidate = format!("{host}:{port}");
    candidate
        .parse()
        .map_err(|_| ConfigError::InvalidBindAddr { value: candidate })
}

/// Parse the comma-separated `identifier:secret` seed list.
///
/// The first colon separates identifier from secret, so secrets may contain
/// colons (but not commas). Empty segments are skipped.
///
/// # Errors
///
/// Returns an error when a segment has no colon or an empty identifier.
pub fn parse_seed_identities(raw: &str) -> ConfigResult<Vec<SeedIdentity>> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(position, segment)| match segment.split_once(':') {
            Some((identifier, secret)) if !identifier.is_empty() => Ok(SeedIdentity {
                identifier: identifier.to_string(),
                secret: secret.to_string(),
            }),
            _ => Err(ConfigError::InvalidIdentity { position }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exclusions_accepts_exact_and_wildcard_entries() {
        let exclusions =
            parse_exclusions("/api/v1/status, /admin/*").expect("entries should parse");
        assert!(!exclusions.requires_auth("/api/v1/status/"));
        assert!(!exclusions.requires_auth("/admin/tasks"));
        assert!(exclusions.requires_auth("/api/v1/users"));
    }

    #[test]
    fn parse_exclusions_of_empty_string_yields_empty_list() {
        let exclusions = parse_exclusions("").expect("empty input should parse");
        assert!(exclusions.is_empty());
        assert!(exclusions.requires_auth("/anything"));
    }

    #[test]
    fn parse_exclusions_reports_the_offending_entry() {
        let err = parse_exclusions("/api/v1/status,no-slash").unwrap_err();
        match err {
            ConfigError::InvalidExclusion { value, .. } => assert_eq!(value, "no-slash"),
            other => panic!("expected invalid exclusion, got {other:?}"),
        }
    }

    #[test]
    fn parse_bind_addr_accepts_host_and_port() {
        let addr = parse_bind_addr("127.0.0.1", "8080").expect("address should parse");
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn parse_bind_addr_rejects_garbage() {
        let err = parse_bind_addr("localhost", "not-a-port").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn parse_seed_identities_splits_on_the_first_colon() {
        let identities =
            parse_seed_identities("alice:s3cr:et,bob:hunter2").expect("pairs should parse");
        assert_eq!(identities.len(), 2);
        assert_eq!(identities[0].identifier, "alice");
        assert_eq!(identities[0].secret, "s3cr:et");
        assert_eq!(identities[1].identifier, "bob");
    }

    #[test]
    fn parse_seed_identities_rejects_colonless_pairs() {
        let err = parse_seed_identities("alice").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIdentity { position: 0 }));
    }

    #[test]
    fn parse_seed_identities_rejects_empty_identifier() {
        let err = parse_seed_identities("alice:right,:oops").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIdentity { position: 1 }));
    }

    #[test]
    fn parse_seed_identities_of_empty_string_is_empty() {
        let identities = parse_seed_identities("").expect("empty input should parse");
        assert!(identities.is_empty());
    }
}
