//! Authenticator contract and strategy selection.
//!
//! The active strategy is chosen once at startup from configuration and
//! invoked through the same two-operation contract regardless of which
//! variant is active. Requests never dispatch on strategy names.

use std::sync::Arc;

use async_trait::async_trait;
use http::HeaderMap;
use tracing::warn;

use crate::basic::BasicAuthenticator;
use crate::exclusions::ExclusionList;
use crate::store::CredentialStore;
use crate::verdict::AuthVerdict;

/// Two-operation contract every authentication strategy satisfies.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Whether the given request path requires authentication at all.
    fn requires_auth(&self, path: &str) -> bool;

    /// Resolve the request headers into a verdict.
    async fn authenticate(&self, headers: &HeaderMap) -> AuthVerdict;
}

/// Strategy that disables authentication entirely.
///
/// Distinct from "auth configured but path exempt": every request passes
/// without consulting any exclusion list.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAuth;

#[async_trait]
impl Authenticator for NoAuth {
    fn requires_auth(&self, _path: &str) -> bool {
        false
    }

    async fn authenticate(&self, _headers: &HeaderMap) -> AuthVerdict {
        AuthVerdict::Exempt
    }
}

/// Closed set of authentication strategies selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// No authentication; every request passes.
    #[default]
    None,
    /// HTTP Basic credentials resolved against the credential store.
    Basic,
}

impl StrategyKind {
    /// Parse a configuration selector.
    ///
    /// Unrecognised selectors fall back to [`StrategyKind::None`] and are
    /// logged at warn so a typo is visible at startup. This fallback is the
    /// only fail-open point in the system and applies at the strategy level
    /// alone.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" | "basic_auth" => Self::Basic,
            "" | "none" => Self::None,
            other => {
                warn!(
                    strategy = %other,
                    "unrecognised auth strategy selector, falling back to no-auth"
                );
                Self::None
            }
        }
    }

    /// Stable name for logging and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
        }
    }
}

/// Construct the active authenticator for the selected strategy.
///
/// Dispatch happens here, once; callers hold the trait object for the life
/// of the process.
#[must_use]
pub fn build_authenticator(
    kind: StrategyKind,
    exclusions: ExclusionList,
    store: Arc<dyn CredentialStore>,
) -> Arc<dyn Authenticator> {
    match kind {
        StrategyKind::None => Arc::new(NoAuth),
        StrategyKind::Basic => Arc::new(BasicAuthenticator::new(exclusions, store)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCredentialStore;

    #[test]
    fn parse_recognises_known_selectors() {
        assert_eq!(StrategyKind::parse("basic"), StrategyKind::Basic);
        assert_eq!(StrategyKind::parse("basic_auth"), StrategyKind::Basic);
        assert_eq!(StrategyKind::parse("BASIC"), StrategyKind::Basic);
        assert_eq!(StrategyKind::parse("none"), StrategyKind::None);
        assert_eq!(StrategyKind::parse(""), StrategyKind::None);
    }

    #[test]
    fn parse_falls_back_to_none_for_unknown_selectors() {
        assert_eq!(StrategyKind::parse("session"), StrategyKind::None);
        assert_eq!(StrategyKind::parse("jwt"), StrategyKind::None);
    }

    #[tokio::test]
    async fn no_auth_passes_every_request() {
        let auth = NoAuth;
        assert!(!auth.requires_auth("/api/v1/users"));
        assert!(!auth.requires_auth(""));
        assert_eq!(auth.authenticate(&HeaderMap::new()).await, AuthVerdict::Exempt);
    }

    #[tokio::test]
    async fn build_dispatches_on_strategy_kind() {
        let store = Arc::new(MemoryCredentialStore::new());

        let none = build_authenticator(
            StrategyKind::None,
            ExclusionList::default(),
            store.clone(),
        );
        assert!(!none.requires_auth("/api/v1/users"));

        let basic = build_authenticator(StrategyKind::Basic, ExclusionList::default(), store);
        assert!(basic.requires_auth("/api/v1/users"));
        assert_eq!(
            basic.authenticate(&HeaderMap::new()).await,
            AuthVerdict::Unauthenticated
        );
    }
}
