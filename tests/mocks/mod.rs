pub mod mock_weather_provider;

pub use mock_weather_provider::MockWeatherProvider;
