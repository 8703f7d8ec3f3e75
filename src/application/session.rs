//! Session context - The current credential, threaded explicitly.
//!
//! Constructed once per session from a [`CredentialStore`] and cloned into
//! every controller. Login and logout write through to the store; the last
//! write wins.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::foundation::Credential;
use crate::ports::{CredentialStore, CredentialStoreError};

#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
    current: Arc<RwLock<Credential>>,
}

impl SessionContext {
    /// Opens a session with whatever credential the store holds.
    pub async fn open(store: Arc<dyn CredentialStore>) -> Self {
        let credential = store.load().await;
        Self {
            store,
            current: Arc::new(RwLock::new(credential)),
        }
    }

    /// The credential to send with the next request.
    pub async fn credential(&self) -> Credential {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_authenticated()
    }

    /// Persists a freshly issued credential.
    pub async fn sign_in(&self, credential: Credential) -> Result<(), CredentialStoreError> {
        self.store.save(&credential).await?;
        *self.current.write().await = credential;
        info!("Session credential stored");
        Ok(())
    }

    /// Drops the credential. The in-memory copy is cleared even when the
    /// store fails.
    pub async fn sign_out(&self) -> Result<(), CredentialStoreError> {
        *self.current.write().await = Credential::anonymous();
        self.store.clear().await?;
        info!("Session credential cleared");
        Ok(())
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCredentialStore;

    #[tokio::test]
    async fn open_reads_the_stored_credential() {
        let store = Arc::new(InMemoryCredentialStore::with_token("abc"));
        let session = SessionContext::open(store).await;

        assert_eq!(session.credential().await, Credential::new("abc"));
    }

    #[tokio::test]
    async fn sign_in_and_out_write_through() {
        let store = Arc::new(InMemoryCredentialStore::new());
        let session = SessionContext::open(store.clone()).await;

        session.sign_in(Credential::new("fresh")).await.unwrap();
        assert!(session.is_authenticated().await);
        assert_eq!(store.load().await, Credential::new("fresh"));

        session.sign_out().await.unwrap();
        assert!(!session.is_authenticated().await);
        assert!(!store.load().await.is_authenticated());
    }

    #[tokio::test]
    async fn clones_share_the_credential() {
        let session = SessionContext::open(Arc::new(InMemoryCredentialStore::new())).await;
        let other = session.clone();

        session.sign_in(Credential::new("shared")).await.unwrap();
        assert_eq!(other.credential().await, Credential::new("shared"));
    }
}
