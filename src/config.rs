//! Configuration management for the contact assistant.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Nothing here is required: without a weather API key the
//! assistant still runs and the `weather` command reports that it is not
//! configured.

use crate::directory::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::num::NonZeroUsize;

/// Default OpenWeather API base URL.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Weather API base URL
    pub weather_api_url: String,

    /// Weather API key; `None` disables the weather command
    pub weather_api_key: Option<String>,

    /// HTTP request timeout in seconds (default: 5)
    pub request_timeout: u64,

    /// Records per page when listing contacts (default: 10)
    pub page_size: NonZeroUsize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `WEATHER_API_URL`: Base URL for the weather API
    /// - `WEATHER_API_KEY`: API key for the weather API
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 5)
    /// - `PAGE_SIZE`: Contacts per page for `show all` (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let weather_api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string());

        if !weather_api_url.starts_with("http://") && !weather_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "WEATHER_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let weather_api_key = env::var("WEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 5)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let page_size = Self::parse_env_page_size("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            weather_api_url,
            weather_api_key,
            request_timeout,
            page_size,
            log_level,
        })
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

    /// Parse an environment variable as a non-zero page size.
    fn parse_env_page_size(var_name: &str, default: NonZeroUsize) -> ConfigResult<NonZeroUsize> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a number greater than 0, got: {}", val),
                }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            weather_api_key: None,
            request_timeout: 5,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "error".to_string(),
        }
    }
}
