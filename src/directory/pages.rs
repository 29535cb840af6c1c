//! Paginated enumeration of a directory.

use crate::models::Record;
use std::num::NonZeroUsize;

/// A finite, lazy sequence of pages over a snapshot of records.
///
/// The snapshot is taken when the iterator is created; a fresh call to
/// [`AddressBook::pages`](super::AddressBook::pages) observes later changes.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Vec<&'a Record>,
    page_size: NonZeroUsize,
    next_page: usize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: Vec<&'a Record>, page_size: NonZeroUsize) -> Self {
        Self {
            records,
            page_size,
            next_page: 0,
        }
    }

    /// Total number of pages: `ceil(records / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(self.page_size.get())
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_page * self.page_size.get();
        if start >= self.records.len() {
            return None;
        }
        let end = (start + self.page_size.get()).min(self.records.len());
        self.next_page += 1;
        Some(self.records[start..end].to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_pages() - self.next_page.min(self.total_pages());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}
