//! Data models for the contact directory.

pub mod record;

pub use record::{Record, BIRTHDAY_NOT_SPECIFIED, RECORD_SEPARATOR};
