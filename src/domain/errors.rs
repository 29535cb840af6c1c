//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace.
    EmptyName,

    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// The day/month pair does not name a day of the year.
    InvalidBirthday { day: u32, month: u32 },

    /// The birthday text is not in `DD/MM` form.
    InvalidDateFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday { day, month } => {
                write!(f, "Invalid birthday: {:02}/{:02}", day, month)
            }
            Self::InvalidDateFormat(text) => {
                write!(f, "Invalid date: {} (expected DD/MM)", text)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
