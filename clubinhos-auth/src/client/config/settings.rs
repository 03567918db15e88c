use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Overrides where the token file lives (defaults to the user cache dir)
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    clubinhos_api::DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("CLUBINHOS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("CLUBINHOS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url is required".to_string());
        }
        if !self.api_url.starts_with("http") {
            return Err("api_url must be a valid HTTP(S) URL".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            storage_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, "http://localhost:3000");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_url_and_zero_timeout() {
        let settings = Settings {
            api_url: "ftp://clubinhos".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err("request_timeout_secs must be greater than zero".to_string())
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: Settings = Config::builder()
            .set_override("api_url", "https://api.clubinhos.org")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.api_url, "https://api.clubinhos.org");
        assert_eq!(settings.request_timeout_secs, 10);
        assert!(settings.storage_dir.is_none());
    }
}
