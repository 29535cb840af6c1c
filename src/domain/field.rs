//! Generic validated field.
//!
//! A [`ValidatedField`] holds a single value together with the [`FieldRule`]
//! that every assignment must satisfy. Value objects such as
//! [`Phone`](super::Phone) and [`Name`](super::Name) wrap a field instead of
//! re-implementing the check-then-commit dance themselves.

use super::errors::ValidationError;
use std::fmt;
use std::marker::PhantomData;

/// A validation rule for a [`ValidatedField`].
pub trait FieldRule {
    /// The stored value type.
    type Value: Clone + fmt::Debug + PartialEq;

    /// Canonicalise a raw value before it is validated.
    ///
    /// The default keeps the value as given.
    fn normalize(value: Self::Value) -> Self::Value {
        value
    }

    /// Check a (normalised) value.
    fn validate(value: &Self::Value) -> Result<(), ValidationError>;
}

/// A value that can only ever hold something its rule accepts.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::{PhoneRule, ValidatedField};
///
/// let mut field = ValidatedField::<PhoneRule>::new("0501234567".to_string()).unwrap();
/// assert!(field.set_value("nope".to_string()).is_err());
/// assert_eq!(field.value(), "0501234567");
/// ```
pub struct ValidatedField<R: FieldRule> {
    value: R::Value,
    _rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Create a field, validating the initial value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected.
    pub fn new(value: R::Value) -> Result<Self, ValidationError> {
        let value = R::normalize(value);
        R::validate(&value)?;
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// Get the current value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Replace the value.
    ///
    /// The new value is committed only if the rule accepts it; on error the
    /// previous value is left intact.
    pub fn set_value(&mut self, value: R::Value) -> Result<(), ValidationError> {
        let value = R::normalize(value);
        R::validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> R::Value {
        self.value
    }
}

// Manual impls: derives would put bounds on `R` itself.
impl<R: FieldRule> Clone for ValidatedField<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: FieldRule> fmt::Debug for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedField").field(&self.value).finish()
    }
}

impl<R: FieldRule> PartialEq for ValidatedField<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for ValidatedField<R> where R::Value: Eq {}

impl<R: FieldRule> fmt::Display for ValidatedField<R>
where
    R::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
