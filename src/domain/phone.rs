//! Phone value object.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Rule for phone numbers: exactly ten ASCII digits, nothing else.
#[derive(Debug)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;

    fn validate(value: &String) -> Result<(), ValidationError> {
        if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(value.clone()))
        }
    }
}

/// A type-safe wrapper for phone numbers.
///
/// Both construction and [`Phone::set_value`] run the validation, so a
/// `Phone` can never hold anything but ten digits.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("+1-555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(ValidatedField<PhoneRule>);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        ValidatedField::new(phone.into()).map(Self)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Replace the number in place. On error the old number is kept.
    pub fn set_value(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.0.set_value(phone.into())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
