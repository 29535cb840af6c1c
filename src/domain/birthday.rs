//! Birthday value object.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})$").expect("Failed to compile DD/MM regex"));

/// Longest possible day for each month, leap years included.
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Rule for birthdays: the (day, month) pair must exist in a leap year.
#[derive(Debug)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = (u32, u32);

    fn validate(&(day, month): &(u32, u32)) -> Result<(), ValidationError> {
        let valid = (1..=12).contains(&month) && day >= 1 && day <= MAX_DAYS[month as usize - 1];
        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidBirthday { day, month })
        }
    }
}

/// A yearless birthday.
///
/// A 29/02 birthday is observed on 28/02 in non-leap years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday(ValidatedField<BirthdayRule>);

impl Birthday {
    /// Create a birthday from a day and month.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the month is outside
    /// 1..=12 or the day does not exist in that month.
    pub fn new(day: u32, month: u32) -> Result<Self, ValidationError> {
        ValidatedField::new((day, month)).map(Self)
    }

    pub fn day(&self) -> u32 {
        self.0.value().0
    }

    pub fn month(&self) -> u32 {
        self.0.value().1
    }

    /// The date this birthday falls on in `year`.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            // SAFETY: the rule only admits days that exist in a leap year,
            // so the only miss is 29/02 and 28/02 always exists
            .expect("validated birthday maps to a calendar date")
    }

    /// The next occurrence on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.in_year(today.year());
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            this_year
        }
    }

    /// Whole days from `today` until the next occurrence; 0 when it is today.
    pub fn days_until(&self, today: NaiveDate) -> u32 {
        (self.next_occurrence(today) - today).num_days() as u32
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    /// Parse `DD/MM` text (one or two digits each).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DAY_MONTH_RE
            .captures(s.trim())
            .ok_or_else(|| ValidationError::InvalidDateFormat(s.to_string()))?;
        let parse = |i: usize| {
            caps[i]
                .parse::<u32>()
                .map_err(|_| ValidationError::InvalidDateFormat(s.to_string()))
        };
        Birthday::new(parse(1)?, parse(2)?)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.day(), self.month())
    }
}
