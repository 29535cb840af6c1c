//! HTTP client for the OpenWeather current-weather API.
//!
//! Blocking `ureq` calls with a bounded timeout; the assistant performs the
//! lookup synchronously in the turn that asked for it.

use super::{WeatherProvider, WeatherReport};
use crate::config::Config;
use crate::error::{WeatherError, WeatherResult};
use crate::metrics::{HttpTimer, Metrics};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Body of a current-weather response.
///
/// `cod` is a number on success but a string on some errors, so it is kept
/// as a raw JSON value.
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    cod: serde_json::Value,

    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    main: Option<MainBlock>,

    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: String,
}

/// Error body returned with a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// OpenWeather API client.
#[derive(Clone)]
pub struct OpenWeatherClient {
    /// Base URL for the API
    base_url: String,

    /// API key sent as `appid`
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl OpenWeatherClient {
    /// Create a client from configuration.
    ///
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &Config, metrics: Metrics) -> Option<Self> {
        let api_key = config.weather_api_key.clone()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Some(Self {
            base_url: config.weather_api_url.clone(),
            api_key,
            agent: Arc::new(agent),
            metrics,
        })
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(5))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the request URL for a city.
    fn build_url(&self, city: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!(
            "{}/weather?q={}&appid={}&units=metric",
            base,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Execute the GET request.
    fn get(&self, city: &str) -> WeatherResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(city);

        tracing::debug!("GET weather for {}", city);
        let result = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e, city));

        match &result {
            Ok(response) => {
                tracing::debug!("Weather for {} - status {}", city, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::warn!("Weather for {} - error: {}", city, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a WeatherError.
    fn map_error(&self, error: ureq::Error, city: &str) -> WeatherError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .map(|b| b.message)
                    .unwrap_or(body);

                match code {
                    401 => WeatherError::Unauthorized,
                    404 => WeatherError::NotFound(city.to_string()),
                    _ => WeatherError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    WeatherError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    WeatherError::Timeout
                } else {
                    WeatherError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Turn a parsed body into a report, checking the embedded status code.
    fn into_report(city: &str, body: CurrentWeatherResponse) -> WeatherResult<WeatherReport> {
        let cod = match &body.cod {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.parse::<u64>().ok(),
            _ => None,
        };

        match cod {
            Some(200) => {}
            Some(404) => return Err(WeatherError::NotFound(city.to_string())),
            Some(status) => {
                return Err(WeatherError::ApiError {
                    status: u16::try_from(status).unwrap_or(u16::MAX),
                    message: body.message.unwrap_or_default(),
                })
            }
            None => {
                return Err(WeatherError::MalformedResponse(
                    "missing status code".to_string(),
                ))
            }
        }

        let temperature = body
            .main
            .map(|m| m.temp)
            .ok_or_else(|| WeatherError::MalformedResponse("missing temperature".to_string()))?;
        let description = body
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| WeatherError::MalformedResponse("missing description".to_string()))?;

        Ok(WeatherReport {
            city: city.to_string(),
            description,
            temperature,
        })
    }
}

impl WeatherProvider for OpenWeatherClient {
    fn current_weather(&self, city: &str) -> WeatherResult<WeatherReport> {
        let response = self.get(city)?;
        let body = response
            .into_string()
            .map_err(|e| WeatherError::HttpError(e.to_string()))?;
        let parsed: CurrentWeatherResponse =
            serde_json::from_str(&body).map_err(WeatherError::JsonError)?;
        Self::into_report(city, parsed)
    }
}
