//! Contact Assistant - an interactive command-line assistant with an in-memory
//! contact directory.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **directory**: The `AddressBook` and its paginated enumeration
//! - **commands**: Line parsing and the `CommandDispatcher`
//! - **weather**: The `WeatherProvider` boundary and its OpenWeather client
//! - **clock**: Injectable wall clock
//! - **repl**: The read-eval loop
//! - **metrics**: Command and HTTP counters
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod clock;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repl;
pub mod weather;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Command, CommandDispatcher, Outcome};
pub use config::Config;
pub use directory::{AddressBook, Pages};
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, DirectoryError, WeatherError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::Record;
pub use weather::{OpenWeatherClient, UnconfiguredProvider, WeatherProvider, WeatherReport};
