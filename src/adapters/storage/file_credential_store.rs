//! File-based Credential Store Adapter
//!
//! Keeps the session token in a small JSON document (`{"token": "..."}`) so
//! that it survives restarts. Logging out removes the file.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::config::StorageConfig;
use crate::domain::foundation::Credential;
use crate::ports::{CredentialStore, CredentialStoreError};

#[derive(Serialize, Deserialize)]
struct StoredCredential {
    #[serde(default)]
    token: String,
}

/// File-based storage for the session credential
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by the given file
    ///
    /// # Example
    /// ```ignore
    /// let store = FileCredentialStore::new(".contact-desk/credential.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.credential_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    async fn ensure_parent(&self) -> Result<(), CredentialStoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialStoreError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Credential {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Credential::anonymous(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Credential file unreadable");
                return Credential::anonymous();
            }
        };

        match serde_json::from_str::<StoredCredential>(&json) {
            Ok(stored) => Credential::new(stored.token),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Credential file malformed");
                Credential::anonymous()
            }
        }
    }

    async fn save(&self, credential: &Credential) -> Result<(), CredentialStoreError> {
        self.ensure_parent().await?;

        let stored = StoredCredential {
            token: credential.expose().to_string(),
        };
        let json = serde_json::to_string(&stored)
            .map_err(|e| CredentialStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| CredentialStoreError::IoError(e.to_string()))
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialStoreError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_loads_anonymous() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("credential.json"));

        assert!(!store.load().await.is_authenticated());
    }

    #[tokio::test]
    async fn saved_token_survives_reopening() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/credential.json");

        FileCredentialStore::new(&path)
            .save(&Credential::new("8f2c-token"))
            .await
            .unwrap();

        let reopened = FileCredentialStore::new(&path);
        assert_eq!(reopened.load().await, Credential::new("8f2c-token"));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"token":"8f2c-token"}"#);
    }

    #[tokio::test]
    async fn clear_removes_the_token_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("credential.json"));
        store.save(&Credential::new("8f2c-token")).await.unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(!store.path().exists());
        assert_eq!(store.load().await, Credential::anonymous());
    }

    #[tokio::test]
    async fn malformed_file_loads_anonymous() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credential.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileCredentialStore::new(&path);
        assert!(!store.load().await.is_authenticated());
    }
}
