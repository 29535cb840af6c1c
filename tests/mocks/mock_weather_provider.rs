use contact_assistant::error::{WeatherError, WeatherResult};
use contact_assistant::weather::{WeatherProvider, WeatherReport};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock weather provider for testing.
///
/// Answers from a fixed table of cities and records every lookup so tests
/// can verify what the dispatcher asked for. Unknown cities fail with
/// `WeatherError::NotFound`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockWeatherProvider {
    reports: Arc<Mutex<HashMap<String, (String, f64)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockWeatherProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the weather for a city.
    pub fn with_city(self, city: &str, description: &str, temperature: f64) -> Self {
        self.reports
            .lock()
            .unwrap()
            .insert(city.to_lowercase(), (description.to_string(), temperature));
        self
    }

    /// Cities looked up so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl WeatherProvider for MockWeatherProvider {
    fn current_weather(&self, city: &str) -> WeatherResult<WeatherReport> {
        self.calls.lock().unwrap().push(city.to_string());

        let reports = self.reports.lock().unwrap();
        reports
            .get(&city.to_lowercase())
            .map(|(description, temperature)| WeatherReport {
                city: city.to_string(),
                description: description.clone(),
                temperature: *temperature,
            })
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))
    }
}
