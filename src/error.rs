//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The core never prints; it fails with one of these and the dispatcher turns
//! it into a message for the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors from directory and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no such phone number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A field value was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when asking a weather provider.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The provider does not know the city
    #[error("City not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Response parsed but lacks a required field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No API key configured
    #[error("Weather provider is not configured")]
    NotConfigured,
}

/// Errors raised while dispatching a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of arguments; carries the hint shown to the user
    #[error("{0}")]
    MissingArguments(&'static str),

    /// An argument has the wrong shape; carries the message shown to the user
    #[error("{0}")]
    InvalidArgument(String),

    /// Verb not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Directory or record operation failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Weather lookup failed
    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Directory(DirectoryError::Validation(err))
    }
}

impl CommandError {
    /// The message shown to the user for this error.
    ///
    /// This is the only place error kinds are translated into text.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::MissingArguments(hint) => hint.to_string(),
            CommandError::InvalidArgument(message) => message.clone(),
            CommandError::UnknownCommand(_) => {
                "Invalid command. Type 'help' to see the available commands.".to_string()
            }
            CommandError::Directory(DirectoryError::ContactNotFound(_)) => {
                "Contact not found".to_string()
            }
            CommandError::Directory(DirectoryError::PhoneNotFound(_)) => {
                "Phone number not found".to_string()
            }
            CommandError::Directory(DirectoryError::Validation(e)) => e.to_string(),
            CommandError::Weather(e) => format!("Failed to retrieve weather information: {}", e),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with WeatherError
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::ContactNotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Contact not found: Bob");

        let err = ConfigError::InvalidValue {
            var: "PAGE_SIZE".to_string(),
            reason: "Must be a number greater than 0, got: 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PAGE_SIZE: Must be a number greater than 0, got: 0"
        );

        let err = WeatherError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");
    }

    #[test]
    fn test_api_error_variants() {
        let err = WeatherError::ApiError {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad gateway"));
    }

    #[test]
    fn test_user_messages() {
        let cases: Vec<(CommandError, &str)> = vec![
            (
                CommandError::MissingArguments("Enter user name"),
                "Enter user name",
            ),
            (
                CommandError::UnknownCommand("dance".to_string()),
                "Invalid command. Type 'help' to see the available commands.",
            ),
            (
                DirectoryError::ContactNotFound("X".to_string()).into(),
                "Contact not found",
            ),
            (
                DirectoryError::PhoneNotFound("1".to_string()).into(),
                "Phone number not found",
            ),
            (
                ValidationError::InvalidPhone("12".to_string()).into(),
                "Invalid phone number: 12",
            ),
            (
                WeatherError::NotConfigured.into(),
                "Failed to retrieve weather information: Weather provider is not configured",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.user_message(), expected);
        }
    }
}
