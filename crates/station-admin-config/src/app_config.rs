//! Application configuration
//!
//! Configuration loaded from `.station-admin.toml`, with the API base URL
//! overridable from the environment.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "STATION_ADMIN_API_URL";

/// Application configuration loaded from `.station-admin.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the REST API (collections live directly below it)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://68d390e7214be68f8c6646ef.mockapi.io".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// A `.env` file and `STATION_ADMIN_API_URL` take precedence over the file.
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        let config = match crate::load_config_file() {
            Some(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_api_url_override(env::var(API_URL_ENV).ok())
    }

    /// Replace the API base URL when an override is present and non-empty
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            log::info!("Using API base URL from {}: {}", API_URL_ENV, url);
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_base_url.starts_with("https://"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            api_base_url = "http://localhost:3000"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_env_override() {
        let config = AppConfig::default().with_api_url_override(Some(" http://api.test ".into()));
        assert_eq!(config.api_base_url, "http://api.test");

        let untouched = AppConfig::default().with_api_url_override(Some(String::new()));
        assert_eq!(untouched, AppConfig::default());
    }
}
