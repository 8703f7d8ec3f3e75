//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONTACT_DESK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use contact_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url());
//! ```

mod api;
mod error;
mod logging;
mod storage;

pub use api::{ApiConfig, Environment};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote REST API (base URL, environment)
    #[serde(default)]
    pub api: ApiConfig,

    /// Credential persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONTACT_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONTACT_DESK__API__BASE_URL=http://localhost:3000/api` -> `api.base_url`
    /// - `CONTACT_DESK__STORAGE__CREDENTIAL_PATH=...` -> `storage.credential_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTACT_DESK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("CONTACT_DESK__API__BASE_URL", "http://localhost:3000/api");
    }

    fn clear_env() {
        env::remove_var("CONTACT_DESK__API__BASE_URL");
        env::remove_var("CONTACT_DESK__API__ENVIRONMENT");
        env::remove_var("CONTACT_DESK__STORAGE__CREDENTIAL_PATH");
        env::remove_var("CONTACT_DESK__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url(), "http://localhost:3000/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_for_missing_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.environment, Environment::Development);
        assert_eq!(
            config.storage.credential_path,
            PathBuf::from(".contact-desk/credential.json")
        );
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CONTACT_DESK__API__ENVIRONMENT", "production");
        env::set_var("CONTACT_DESK__STORAGE__CREDENTIAL_PATH", "/tmp/desk.json");
        env::set_var("CONTACT_DESK__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.api.is_production());
        assert_eq!(config.storage.credential_path, PathBuf::from("/tmp/desk.json"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.validate(),
            Err(ValidationError::BaseUrlMustBeHttps)
        );
    }

    #[test]
    fn test_missing_base_url_fails_validation() {
        let config = AppConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("API__BASE_URL"))
        );
    }
}
