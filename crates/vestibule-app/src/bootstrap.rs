//! Application bootstrap: configuration, store seeding, server wiring.
//!
//! The boot sequence is strictly startup-time work: install logging, read
//! and validate configuration, seed the credential store, select the
//! authentication strategy once, then hand the authenticator to the HTTP
//! server for the life of the process.

use std::sync::Arc;

use tracing::info;
use vestibule_api::ApiServer;
use vestibule_auth::{MemoryCredentialStore, build_authenticator};
use vestibule_config::AppConfig;
use vestibule_telemetry::LoggingConfig;

use crate::error::{AppError, AppResult};

/// Entry point for the Vestibule application boot sequence.
///
/// # Errors
///
/// Returns an error if logging installation, configuration loading, store
/// seeding, or the server itself fails. All of these abort startup; nothing
/// request-scoped surfaces here.
pub async fn run_app() -> AppResult<()> {
    vestibule_telemetry::init_logging(&LoggingConfig::default())
        .map_err(|source| AppError::telemetry("telemetry.init", source))?;

    let config =
        AppConfig::from_env().map_err(|source| AppError::config("config.from_env", source))?;

    info!(
        strategy = config.strategy.as_str(),
        addr = %config.bind_addr,
        identities = config.seed_identities.len(),
        "Vestibule bootstrap starting"
    );

    let store = seed_store(&config)?;
    let authenticator = build_authenticator(config.strategy, config.exclusions.clone(), store);

    ApiServer::new(authenticator)
        .serve(config.bind_addr)
        .await
        .map_err(|source| AppError::api_server("api.serve", source))?;

    Ok(())
}

/// Hash and load the configured seed identities into the in-memory store.
fn seed_store(config: &AppConfig) -> AppResult<Arc<MemoryCredentialStore>> {
    let mut store = MemoryCredentialStore::new();
    for identity in &config.seed_identities {
        store
            .insert(&identity.identifier, &identity.secret)
            .map_err(|source| AppError::store("store.seed", source))?;
    }
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vestibule_auth::{ExclusionList, StrategyKind};
    use vestibule_config::SeedIdentity;

    fn config_with_identities(identities: Vec<SeedIdentity>) -> AppConfig {
        AppConfig {
            bind_addr: "127.0.0.1:0".parse().expect("address should parse"),
            strategy: StrategyKind::Basic,
            exclusions: ExclusionList::default(),
            seed_identities: identities,
        }
    }

    #[test]
    fn seed_store_loads_each_identity() {
        let config = config_with_identities(vec![
            SeedIdentity {
                identifier: "alice".to_string(),
                secret: "right".to_string(),
            },
            SeedIdentity {
                identifier: "bob".to_string(),
                secret: "hunter2".to_string(),
            },
        ]);
        let store = seed_store(&config).expect("seeding should succeed");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn seed_store_with_no_identities_is_empty() {
        let config = config_with_identities(Vec::new());
        let store = seed_store(&config).expect("seeding should succeed");
        assert!(store.is_empty());
    }
}
