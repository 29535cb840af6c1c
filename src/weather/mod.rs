//! Weather lookups.
//!
//! The dispatcher only sees the [`WeatherProvider`] trait. The real
//! implementation is [`OpenWeatherClient`]; [`UnconfiguredProvider`] stands in
//! when no API key is set.

mod openweather;

pub use openweather::OpenWeatherClient;

use crate::error::{WeatherError, WeatherResult};

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// City as requested
    pub city: String,

    /// Short description, e.g. "light rain"
    pub description: String,

    /// Temperature in degrees Celsius
    pub temperature: f64,
}

/// A source of current weather.
pub trait WeatherProvider {
    /// Look up the current weather for `city`.
    fn current_weather(&self, city: &str) -> WeatherResult<WeatherReport>;
}

/// Provider used when no API key is configured; every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredProvider;

impl WeatherProvider for UnconfiguredProvider {
    fn current_weather(&self, _city: &str) -> WeatherResult<WeatherReport> {
        Err(WeatherError::NotConfigured)
    }
}
