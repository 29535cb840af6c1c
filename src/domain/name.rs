//! Name value object.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Capitalize a string: first character upper-cased, the rest lower-cased.
///
/// ```
/// use contact_assistant::domain::name::capitalize;
///
/// assert_eq!(capitalize("jOHN smith"), "John smith");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Rule for names: trimmed, capitalized, non-empty.
#[derive(Debug)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;

    fn normalize(value: String) -> String {
        capitalize(value.trim())
    }

    fn validate(value: &String) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A contact's display name.
///
/// The stored form is always the capitalized one, so `as_str` doubles as the
/// canonical directory key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(ValidatedField<NameRule>);

impl Name {
    /// Create a new Name from user text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for empty or whitespace-only input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        ValidatedField::new(name.into()).map(Self)
    }

    /// The canonical (capitalized) form.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
