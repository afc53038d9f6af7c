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

//! Request authentication core for the Vestibule API.
//!
//! Layout: `exclusions.rs` (path exemption guard), `basic.rs` (Basic-scheme
//! credential pipeline), `strategy.rs` (authenticator contract and variant
//! selection), `store.rs` (credential store collaborators), `verdict.rs`
//! (pipeline outcomes).
//!
//! Both the path guard and the credential resolver are pure functions of
//! their inputs: no caching, no shared mutable state, safe to call from any
//! number of concurrent request tasks. Per-request failures never escape as
//! errors; they are absorbed into [`AuthVerdict`] before reaching the host.

pub mod basic;
pub mod exclusions;
pub mod store;
pub mod strategy;
pub mod verdict;

pub use basic::BasicAuthenticator;
pub use exclusions::{ExclusionEntry, ExclusionError, ExclusionList};
pub use store::{CredentialStore, MemoryCredentialStore, StoreError, StoredIdentity};
pub use strategy::{Authenticator, NoAuth, StrategyKind, build_authenticator};
pub use verdict::{AuthVerdict, Principal};
