//! Basic-scheme credential resolution pipeline.
//!
//! Five total stages, each short-circuiting on `None`: header presence,
//! scheme strip, transport decode, credential split, principal resolution.
//! A stage-1 miss maps to [`AuthVerdict::Unauthenticated`]; any later miss
//! maps to [`AuthVerdict::Rejected`]. No error value ever escapes the
//! pipeline, and no retry is attempted.

use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use http::HeaderMap;
use http::header::AUTHORIZATION;
use tracing::warn;

use crate::exclusions::ExclusionList;
use crate::store::CredentialStore;
use crate::strategy::Authenticator;
use crate::verdict::{AuthVerdict, Principal};

/// Literal scheme prefix accepted in the `Authorization` header value.
///
/// Case-sensitive, exactly one space.
const SCHEME_PREFIX: &str = "Basic ";

/// Case-insensitive lookup of the `Authorization` header.
///
/// An absent or non-UTF-8 value is `None`, not an error.
#[must_use]
pub fn extract_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Strip the literal `Basic ` scheme prefix, returning the remainder.
#[must_use]
pub fn strip_scheme(raw: &str) -> Option<&str> {
    raw.strip_prefix(SCHEME_PREFIX)
}

/// Decode the RFC 4648 padded-alphabet Base64 payload into UTF-8 text.
///
/// Only the decode and UTF-8 conversion failures are absorbed to `None`;
/// nothing else is caught here.
#[must_use]
pub fn decode_transport(encoded: &str) -> Option<String> {
    let bytes = general_purpose::STANDARD.decode(encoded.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Split decoded credentials on the first colon.
///
/// The secret may itself contain colons; a payload without any colon yields
/// `None` rather than a partially-filled pair.
#[must_use]
pub fn split_credentials(decoded: &str) -> Option<(&str, &str)> {
    decoded.split_once(':')
}

/// Basic-scheme authenticator backed by a credential store.
pub struct BasicAuthenticator {
    exclusions: ExclusionList,
    store: Arc<dyn CredentialStore>,
}

impl BasicAuthenticator {
    /// Construct an authenticator over the given exclusions and store.
    #[must_use]
    pub fn new(exclusions: ExclusionList, store: Arc<dyn CredentialStore>) -> Self {
        Self { exclusions, store }
    }

    /// Resolve an identifier/secret pair into a principal.
    ///
    /// Lookup errors, missing records, verification errors, and mismatches
    /// all collapse to `None`; store errors are logged at warn and treated
    /// identically to a mismatch.
    async fn resolve_principal(&self, identifier: &str, secret: &str) -> Option<Principal> {
        let identity = match self.store.find_identity(identifier).await {
            Ok(Some(identity)) => identity,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "identity lookup failed during credential resolution");
                return None;
            }
        };
        match self.store.verify_secret(&identity, secret) {
            Ok(true) => Some(Principal {
                id: identity.id,
                identifier: identity.identifier,
            }),
            Ok(false) => None,
            Err(err) => {
                warn!(error = %err, "secret verification failed during credential resolution");
                None
            }
        }
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn requires_auth(&self, path: &str) -> bool {
        self.exclusions.requires_auth(path)
    }

    async fn authenticate(&self, headers: &HeaderMap) -> AuthVerdict {
        let Some(raw) = extract_header(headers) else {
            return AuthVerdict::Unauthenticated;
        };
        let Some(encoded) = strip_scheme(raw) else {
            return AuthVerdict::Rejected;
        };
        let Some(decoded) = decode_transport(encoded) else {
            return AuthVerdict::Rejected;
        };
        let Some((identifier, secret)) = split_credentials(&decoded) else {
            return AuthVerdict::Rejected;
        };
        match self.resolve_principal(identifier, secret).await {
            Some(principal) => AuthVerdict::Authenticated(principal),
            None => AuthVerdict::Rejected,
        }
    }
}
