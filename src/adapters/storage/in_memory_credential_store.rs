//! In-Memory Credential Store Adapter
//!
//! Holds the credential for the lifetime of the process.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Credential;
use crate::ports::{CredentialStore, CredentialStoreError};

/// In-memory storage for the session credential
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    credential: Arc<RwLock<Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            credential: Arc::new(RwLock::new(Credential::new(token))),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Credential {
        self.credential.read().await.clone()
    }

    async fn save(&self, credential: &Credential) -> Result<(), CredentialStoreError> {
        *self.credential.write().await = credential.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.credential.write().await = Credential::anonymous();
        Ok(())
    }
}
