//! Domain value objects and types.
//!
//! Type-safe wrappers for the pieces of a contact: its name, phone numbers and
//! birthday. Each one is built on [`ValidatedField`], so invalid data can
//! neither be constructed nor assigned.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule};
pub use errors::ValidationError;
pub use field::{FieldRule, ValidatedField};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
