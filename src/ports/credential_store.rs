//! Credential Store Port - Persists the single session token.
//!
//! Exactly one credential exists at a time. A missing or unreadable entry
//! loads as the anonymous credential rather than an error.

use async_trait::async_trait;

use crate::domain::foundation::Credential;

/// Errors that can occur while writing or clearing the credential.
#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("Failed to serialize credential: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the persisted session credential.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current credential; anonymous when none was saved.
    async fn load(&self) -> Credential;

    /// Replaces the stored credential.
    ///
    /// # Errors
    /// Returns `CredentialStoreError` if the entry cannot be written
    async fn save(&self, credential: &Credential) -> Result<(), CredentialStoreError>;

    /// Resets the stored credential to anonymous. Idempotent.
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
