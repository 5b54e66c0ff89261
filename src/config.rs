//! Configuration management for the contact-form service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default EmailJS REST endpoint host.
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com";

/// Configuration for the EmailJS delivery provider.
#[derive(Debug, Clone)]
pub struct Config {
    /// EmailJS API base URL
    pub api_url: String,

    /// EmailJS service identifier (destination mail service)
    pub service_id: String,

    /// EmailJS template identifier
    pub template_id: String,

    /// EmailJS public key (sent as `user_id`)
    pub public_key: String,

    /// Optional private key (sent as `accessToken`)
    pub private_key: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional environment variables:
    /// - `EMAILJS_PRIVATE_KEY`: access token for strict-mode accounts
    /// - `EMAILJS_API_URL`: API base URL (default: https://api.emailjs.com)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let service_id = Self::require_env("EMAILJS_SERVICE_ID")?;
        let template_id = Self::require_env("EMAILJS_TEMPLATE_ID")?;
        let public_key = Self::require_env("EMAILJS_PUBLIC_KEY")?;

        let private_key = env::var("EMAILJS_PRIVATE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url = env::var("EMAILJS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "EMAILJS_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_url,
            service_id,
            template_id,
            public_key,
            private_key,
            request_timeout,
            log_level,
        })
    }

    /// Read a required, non-blank environment variable.
    fn require_env(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(value)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
