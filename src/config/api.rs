//! REST API configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Remote API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default)]
    pub base_url: String,

    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ApiConfig {
    /// Base URL without a trailing slash, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate API configuration
    ///
    /// In production, requires HTTPS for the base URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("API__BASE_URL"));
        }
        let is_http = self.base_url.starts_with("http://");
        let is_https = self.base_url.starts_with("https://");
        if !is_http && !is_https {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.is_production() && !is_https {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            environment: default_environment(),
        }
    }
}

fn default_environment() -> Environment {
    Environment::Development
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        assert_eq!(config("http://localhost:3000/api/").base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_validation_missing_base_url() {
        assert_eq!(
            config("").validate(),
            Err(ValidationError::MissingRequired("API__BASE_URL"))
        );
    }

    #[test]
    fn test_validation_rejects_unknown_scheme() {
        assert_eq!(
            config("ftp://example.com").validate(),
            Err(ValidationError::InvalidBaseUrl)
        );
    }

    #[test]
    fn test_production_requires_https() {
        let mut cfg = config("http://api.example.com");
        assert!(cfg.validate().is_ok());

        cfg.environment = Environment::Production;
        assert_eq!(cfg.validate(), Err(ValidationError::BaseUrlMustBeHttps));

        cfg.base_url = "https://api.example.com".to_string();
        assert!(cfg.validate().is_ok());
    }
}
