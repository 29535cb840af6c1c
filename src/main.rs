//! Contact Assistant - main entry point.

use anyhow::Result;
use contact_assistant::weather::{OpenWeatherClient, UnconfiguredProvider, WeatherProvider};
use contact_assistant::{repl, AddressBook, CommandDispatcher, Config, Metrics};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the default filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Logs go to stderr; stdout is the conversation
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();
    let weather: Box<dyn WeatherProvider> =
        match OpenWeatherClient::from_config(&config, metrics.clone()) {
            Some(client) => {
                info!("Weather API: {}", config.weather_api_url);
                Box::new(client)
            }
            None => {
                warn!("WEATHER_API_KEY not set, weather lookups are disabled");
                Box::new(UnconfiguredProvider)
            }
        };

    let book = AddressBook::with_page_size(config.page_size);
    let mut dispatcher = CommandDispatcher::new(book, weather).with_metrics(metrics.clone());

    let stdin = io::stdin();
    repl::run(&mut dispatcher, stdin.lock(), io::stdout())?;

    info!("Session summary: {:?}", metrics.summary());
    Ok(())
}
