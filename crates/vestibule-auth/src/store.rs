//! Credential store collaborators used by the Basic-scheme resolver.
//!
//! The resolver only needs two capabilities from a store: look up an identity
//! record by its identifier, and verify a candidate secret against the stored
//! hash. Store errors never cross the resolver boundary; the pipeline treats
//! them the same as a credential mismatch.

use std::collections::HashMap;

use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by credential store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying identity lookup failed.
    #[error("identity lookup failed")]
    Lookup {
        /// Operation identifier.
        operation: &'static str,
    },
    /// Failed to hash secret material.
    #[error("failed to hash secret material")]
    HashFailed {
        /// Hashing error detail.
        detail: PasswordHashError,
    },
    /// Stored secret hash payload was invalid.
    #[error("invalid stored hash")]
    StoredHashInvalid {
        /// Hash parsing error detail.
        detail: PasswordHashError,
    },
    /// Secret verification failed.
    #[error("failed to verify secret")]
    VerifyFailed {
        /// Verification error detail.
        detail: PasswordHashError,
    },
}

/// A stored identity record with its PHC-format secret hash.
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    /// Stable identifier assigned when the identity was stored.
    pub id: Uuid,
    /// Identifier credentials are looked up by.
    pub identifier: String,
    /// PHC-format argon2 hash of the identity's secret.
    pub secret_hash: String,
}

/// Lookup and verification capabilities the resolver requires.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the identity record for the given identifier, if one exists.
    async fn find_identity(
        &self,
        identifier: &str,
    ) -> Result<Option<StoredIdentity>, StoreError>;

    /// Verify a candidate secret against the stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored hash is unparseable or verification
    /// fails for a reason other than a plain mismatch.
    fn verify_secret(
        &self,
        identity: &StoredIdentity,
        candidate: &str,
    ) -> Result<bool, StoreError> {
        verify_secret(&identity.secret_hash, candidate)
    }
}

/// Hash secret material into a PHC string with a fresh salt.
///
/// # Errors
///
/// Returns an error if the hashing operation itself fails.
pub fn hash_secret(input: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon = Argon2::default();
    let hash = argon
        .hash_password(input.as_bytes(), &salt)
        .map_err(|detail| StoreError::HashFailed { detail })?;
    Ok(hash.to_string())
}

/// Verify a candidate secret against an expected PHC hash.
///
/// A plain mismatch is `Ok(false)`; only unexpected hashing conditions
/// surface as errors.
///
/// # Errors
///
/// Returns an error when the stored hash cannot be parsed or verification
/// fails for a reason other than a mismatch.
pub fn verify_secret(expected_hash: &str, candidate: &str) -> Result<bool, StoreError> {
    let parsed = PasswordHash::new(expected_hash)
        .map_err(|detail| StoreError::StoredHashInvalid { detail })?;
    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(detail) => Err(StoreError::VerifyFailed { detail }),
    }
}

/// In-memory credential store seeded once at startup.
///
/// Read-only after seeding; shared by reference across concurrent requests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    identities: HashMap<String, StoredIdentity>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash the secret and store the identity under its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when hashing the secret fails.
    pub fn insert(&mut self, identifier: &str, secret: &str) -> Result<(), StoreError> {
        let secret_hash = hash_secret(secret)?;
        self.identities.insert(
            identifier.to_string(),
            StoredIdentity {
                id: Uuid::new_v4(),
                identifier: identifier.to_string(),
                secret_hash,
            },
        );
        Ok(())
    }

    /// Number of seeded identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Whether the store holds no identities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_identity(
        &self,
        identifier: &str,
    ) -> Result<Option<StoredIdentity>, StoreError> {
        Ok(self.identities.get(identifier).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find_returns_the_record() {
        let mut store = MemoryCredentialStore::new();
        store
            .insert("alice@example.com", "right")
            .expect("seed identity should hash");

        let identity = store
            .find_identity("alice@example.com")
            .await
            .expect("lookup should succeed")
            .expect("identity should exist");
        assert_eq!(identity.identifier, "alice@example.com");
        assert!(identity.secret_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn unknown_identifier_yields_none() {
        let store = MemoryCredentialStore::new();
        let found = store
            .find_identity("nobody@example.com")
            .await
            .expect("lookup should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn verify_secret_distinguishes_match_from_mismatch() {
        let mut store = MemoryCredentialStore::new();
        store
            .insert("alice@example.com", "right")
            .expect("seed identity should hash");
        let identity = store
            .find_identity("alice@example.com")
            .await
            .expect("lookup should succeed")
            .expect("identity should exist");

        assert!(store
            .verify_secret(&identity, "right")
            .expect("verification should run"));
        assert!(!store
            .verify_secret(&identity, "wrong")
            .expect("verification should run"));
    }

    #[test]
    fn hash_secret_yields_a_verifiable_phc_hash() {
        let hash = hash_secret("s3cr:et").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_secret(&hash, "s3cr:et").expect("verification should run"));
        assert!(!verify_secret(&hash, "other").expect("verification should run"));
    }

    #[test]
    fn verify_secret_rejects_malformed_stored_hash() {
        let err = verify_secret("not-a-phc-hash", "anything").unwrap_err();
        assert!(matches!(err, StoreError::StoredHashInvalid { .. }));
    }
}
