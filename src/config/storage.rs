//! Credential storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the bearer token is persisted between runs
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON document holding the token
    #[serde(default = "default_credential_path")]
    pub credential_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credential_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyCredentialPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credential_path: default_credential_path(),
        }
    }
}

fn default_credential_path() -> PathBuf {
    PathBuf::from(".contact-desk/credential.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(
            config.credential_path,
            PathBuf::from(".contact-desk/credential.json")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let config = StorageConfig {
            credential_path: PathBuf::new(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyCredentialPath));
    }
}
