//! Record model: one contact in the directory.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{DirectoryError, DirectoryResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a missing birthday.
pub const BIRTHDAY_NOT_SPECIFIED: &str = "Not specified";

/// Separator line closing each rendered record.
pub const RECORD_SEPARATOR: &str = "---------";

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep insertion order and never contain the same number twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record, optionally seeded with a first phone and a birthday.
    pub fn new(name: Name, phone: Option<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    /// The contact's name. Immutable once the record exists.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The canonical directory key for this record.
    pub fn key(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Whether the record holds this number.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == phone)
    }

    /// Append a phone unless the same number is already present.
    ///
    /// Returns `true` if the phone was added.
    pub fn add_phone(&mut self, phone: Phone) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        tracing::debug!("{}: adding phone {}", self.name, phone);
        self.phones.push(phone);
        true
    }

    /// Remove a phone by value.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::PhoneNotFound` if the number is absent.
    pub fn delete_phone(&mut self, phone: &str) -> DirectoryResult<Phone> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| DirectoryError::PhoneNotFound(phone.to_string()))?;
        tracing::debug!("{}: deleting phone {}", self.name, phone);
        Ok(self.phones.remove(index))
    }

    /// Change the first phone equal to `old` into `new`.
    ///
    /// If `new` is already one of the other numbers, the edited entry is
    /// dropped instead so the list stays free of duplicates. On any error the
    /// phone list is unchanged.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::PhoneNotFound` if no phone equals `old`
    /// - `DirectoryError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> DirectoryResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| DirectoryError::PhoneNotFound(old.to_string()))?;

        let duplicate = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.as_str() == new);

        if duplicate {
            self.phones.remove(index);
        } else {
            self.phones[index].set_value(new)?;
        }

        tracing::debug!("{}: phone {} changed to {}", self.name, old, new);
        Ok(())
    }

    /// Days from today (local date) until the next birthday.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<u32> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; 0 if it is `today`.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<u32> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        match &self.birthday {
            Some(birthday) => writeln!(f, "Birthday: {}", birthday)?,
            None => writeln!(f, "Birthday: {}", BIRTHDAY_NOT_SPECIFIED)?,
        }
        for phone in &self.phones {
            writeln!(f, "Phone: {}", phone)?;
        }
        writeln!(f, "{}", RECORD_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn phone(s: &str) -> Phone {
        Phone::new(s).unwrap()
    }

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut r = Record::new(Name::new(name).unwrap(), None, None);
        for p in phones {
            r.add_phone(phone(p));
        }
        r
    }

    #[test]
    fn test_new_with_phone_and_birthday() {
        let r = Record::new(
            Name::new("john").unwrap(),
            Some(phone("1234567890")),
            Some(Birthday::new(1, 5).unwrap()),
        );
        assert_eq!(r.key(), "John");
        assert_eq!(r.phones().len(), 1);
        assert_eq!(r.birthday().map(|b| b.to_string()), Some("01/05".to_string()));
    }

    #[test]
    fn test_add_phone_is_idempotent() {
        let mut r = record("Ann", &[]);
        assert!(r.add_phone(phone("1111111111")));
        assert!(!r.add_phone(phone("1111111111")));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_keeps_insertion_order() {
        let r = record("Ann", &["3333333333", "1111111111", "2222222222"]);
        let numbers: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(numbers, vec!["3333333333", "1111111111", "2222222222"]);
    }

    #[test]
    fn test_delete_phone() {
        let mut r = record("Ann", &["1111111111", "2222222222"]);
        let removed = r.delete_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");
        assert!(!r.has_phone("1111111111"));

        let err = r.delete_phone("1111111111").unwrap_err();
        assert_eq!(err, DirectoryError::PhoneNotFound("1111111111".to_string()));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut r = record("Ann", &["1111111111", "2222222222"]);
        r.edit_phone("2222222222", "9999999999").unwrap();
        let numbers: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(numbers, vec!["1111111111", "9999999999"]);
    }

    #[test]
    fn test_edit_phone_missing_leaves_list_unchanged() {
        let mut r = record("Ann", &["1111111111"]);
        let before = r.clone();
        let err = r.edit_phone("5555555555", "9999999999").unwrap_err();
        assert_eq!(err, DirectoryError::PhoneNotFound("5555555555".to_string()));
        assert_eq!(r, before);
    }

    #[test]
    fn test_edit_phone_invalid_replacement_leaves_list_unchanged() {
        let mut r = record("Ann", &["1111111111"]);
        let before = r.clone();
        let err = r.edit_phone("1111111111", "12ab").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Validation(ValidationError::InvalidPhone("12ab".to_string()))
        );
        assert_eq!(r, before);
    }

    #[test]
    fn test_edit_phone_into_existing_number_merges() {
        let mut r = record("Ann", &["1111111111", "2222222222"]);
        r.edit_phone("1111111111", "2222222222").unwrap();
        let numbers: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(numbers, vec!["2222222222"]);
    }

    #[test]
    fn test_edit_phone_to_same_value() {
        let mut r = record("Ann", &["1111111111"]);
        r.edit_phone("1111111111", "1111111111").unwrap();
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_days_to_birthday() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let mut r = record("Ann", &[]);
        assert_eq!(r.days_to_birthday_on(today), None);

        r.set_birthday(Birthday::new(15, 10).unwrap());
        assert_eq!(r.days_to_birthday_on(today), Some(0));

        r.set_birthday(Birthday::new(1, 1).unwrap());
        assert_eq!(r.days_to_birthday_on(today), Some(78));

        r.clear_birthday();
        assert_eq!(r.days_to_birthday(), None);
    }

    #[test]
    fn test_days_to_birthday_uses_system_date() {
        let mut r = record("Ann", &[]);
        r.set_birthday(Birthday::new(1, 1).unwrap());
        let days = r.days_to_birthday().unwrap();
        assert!(days < 366);
    }

    #[test]
    fn test_display() {
        let mut r = record("ann", &["1111111111", "2222222222"]);
        assert_eq!(
            r.to_string(),
            "Name: Ann\nBirthday: Not specified\nPhone: 1111111111\nPhone: 2222222222\n---------\n"
        );

        r.set_birthday(Birthday::new(3, 7).unwrap());
        assert!(r.to_string().contains("Birthday: 03/07\n"));
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let r = record("Ann", &["1111111111"]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"name":"Ann","phones":["1111111111"]}"#);

        let bad = r#"{"name":"Ann","phones":["111"]}"#;
        assert!(serde_json::from_str::<Record>(bad).is_err());
    }
}
