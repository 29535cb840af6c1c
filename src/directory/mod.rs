//! The contact directory.
//!
//! [`AddressBook`] maps a canonical name key (the capitalized name) to exactly
//! one [`Record`]. Iteration follows insertion order; overwriting a key keeps
//! its original position.
//!
//! Lookups by key are case-sensitive. Matching user-typed names against
//! stored keys case-insensitively is the command layer's job.

mod pages;

pub use pages::Pages;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Record;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use tracing::debug;

/// Page size used unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// An ordered, keyed collection of contact records.
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
    page_size: NonZeroUsize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    /// Create an empty directory with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty directory with the given page size.
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            page_size,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a record is stored under this exact key.
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Look up a record by its exact key.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Records in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Insert a record under its name, replacing any record with that key.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.key().to_string();
        debug!("Storing record {}", key);
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Remove the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::ContactNotFound` if no such key exists; the
    /// directory is left unchanged.
    pub fn delete_record(&mut self, key: &str) -> DirectoryResult<Record> {
        let record = self
            .records
            .remove(key)
            .ok_or_else(|| DirectoryError::ContactNotFound(key.to_string()))?;
        self.order.retain(|k| k != key);
        debug!("Deleted record {}", key);
        Ok(record)
    }

    /// Replace the record stored under `key` with `new_record`.
    ///
    /// This is an upsert: `key` does not have to exist. If the new record
    /// carries a different name, it takes the old entry's position under its
    /// own key. Returns the record previously stored under `key`.
    pub fn edit_record(&mut self, key: &str, new_record: Record) -> Option<Record> {
        let new_key = new_record.key().to_string();
        if new_key == key {
            return self.add_record(new_record);
        }

        debug!("Replacing record {} with {}", key, new_key);
        let previous = self.records.remove(key);
        let position = self.order.iter().position(|k| k == key);
        if let Some(pos) = position {
            self.order.remove(pos);
        }

        if !self.records.contains_key(&new_key) {
            match position {
                Some(pos) => self.order.insert(pos, new_key.clone()),
                None => self.order.push(new_key.clone()),
            }
        }
        self.records.insert(new_key, new_record);
        previous
    }

    /// Every record whose name contains `query`, ignoring case.
    ///
    /// An empty query matches everything. The result is a new directory with
    /// the same page size; `self` is not modified.
    pub fn search_records(&self, query: &str) -> AddressBook {
        let needle = query.to_lowercase();
        let mut results = AddressBook::with_page_size(self.page_size);
        for record in self.iter() {
            if record.key().to_lowercase().contains(&needle) {
                results.add_record(record.clone());
            }
        }
        debug!("Search '{}' matched {} record(s)", query, results.len());
        results
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
    }

    /// Enumerate the records page by page, `page_size` records per page.
    ///
    /// An empty directory yields no pages. Each call starts over from a fresh
    /// snapshot.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self.iter().collect(), self.page_size)
    }
}
