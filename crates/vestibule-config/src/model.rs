//! Typed configuration models.

use std::net::SocketAddr;

use vestibule_auth::{ExclusionList, StrategyKind};

/// Runtime configuration assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Active authentication strategy.
    pub strategy: StrategyKind,
    /// Validated path patterns exempt from authentication.
    pub exclusions: ExclusionList,
    /// Identities seeded into the in-memory credential store.
    pub seed_identities: Vec<SeedIdentity>,
}

/// An `identifier:secret` pair seeded at startup.
#[derive(Debug, Clone)]
pub struct SeedIdentity {
    /// Identifier credentials are looked up by.
    pub identifier: String,
    /// Plain secret; hashed before it reaches the store.
    pub secret: String,
}
