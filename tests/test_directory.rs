//! Integration tests for the address book and records through the public API.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Birthday, DirectoryError, Name, Phone, Record};
use std::num::NonZeroUsize;

fn record(name: &str, phone: Option<&str>) -> Record {
    Record::new(
        Name::new(name).unwrap(),
        phone.map(|p| Phone::new(p).unwrap()),
        None,
    )
}

fn keys(book: &AddressBook) -> Vec<String> {
    book.keys().map(str::to_string).collect()
}

#[test]
fn test_valid_phones_render_unchanged() {
    for raw in ["0000000000", "1234567890", "9876543210", "0501112233"] {
        let phone = Phone::new(raw).unwrap();
        assert_eq!(phone.to_string(), raw);
    }
}

#[test]
fn test_invalid_phones_are_rejected() {
    for raw in ["", "123", "12345678901", "123456789a", "+123456789", "12345 6789", "１２３４５６７８９０"] {
        assert!(Phone::new(raw).is_err(), "{:?} should be rejected", raw);
    }
}

#[test]
fn test_same_name_twice_overwrites() {
    let mut book = AddressBook::new();
    book.add_record(record("anna", Some("1111111111")));
    book.add_record(record("Anna", Some("2222222222")));

    assert_eq!(book.len(), 1);
    let stored = book.get("Anna").unwrap();
    assert_eq!(stored.phones()[0].as_str(), "2222222222");
}

#[test]
fn test_delete_absent_leaves_book_unchanged() {
    let mut book = AddressBook::new();
    book.add_record(record("Anna", None));
    book.add_record(record("Bob", None));

    let err = book.delete_record("Carl").unwrap_err();
    assert_eq!(err, DirectoryError::ContactNotFound("Carl".to_string()));
    assert_eq!(keys(&book), vec!["Anna", "Bob"]);
}

#[test]
fn test_edit_record_upserts_but_delete_is_strict() {
    let mut book = AddressBook::new();
    assert!(book.edit_record("Zoe", record("Zoe", None)).is_none());
    assert_eq!(book.len(), 1);

    assert!(book.delete_record("Zoe").is_ok());
    assert!(book.delete_record("Zoe").is_err());
}

#[test]
fn test_fetch_mutate_readd() {
    let mut book = AddressBook::new();
    book.add_record(record("Anna", Some("1111111111")));

    let mut anna = book.get("Anna").cloned().unwrap();
    anna.add_phone(Phone::new("2222222222").unwrap());
    anna.set_birthday(Birthday::new(1, 1).unwrap());
    book.add_record(anna);

    let stored = book.get("Anna").unwrap();
    assert_eq!(stored.phones().len(), 2);
    assert!(stored.birthday().is_some());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_search_example() {
    let mut book = AddressBook::new();
    for name in ["Anna", "Bob", "Andrew"] {
        book.add_record(record(name, None));
    }

    let found = book.search_records("an");
    assert_eq!(keys(&found), vec!["Anna", "Andrew"]);
    assert_eq!(book.len(), 3);
}

#[test]
fn test_pagination_25_by_10() {
    let mut book = AddressBook::new();
    for i in 0..25 {
        book.add_record(record(&format!("Person{}", i), None));
    }

    let pages: Vec<Vec<String>> = book
        .pages()
        .map(|page| page.iter().map(|r| r.key().to_string()).collect())
        .collect();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].len(), 10);
    assert_eq!(pages[1].len(), 10);
    assert_eq!(pages[2].len(), 5);
    assert_eq!(pages[0][0], "Person0");
    assert_eq!(pages[2][4], "Person24");

    // Same order every time
    let again: Vec<Vec<String>> = book
        .pages()
        .map(|page| page.iter().map(|r| r.key().to_string()).collect())
        .collect();
    assert_eq!(pages, again);
}

#[test]
fn test_pagination_empty_book() {
    let book = AddressBook::with_page_size(NonZeroUsize::new(3).unwrap());
    assert_eq!(book.pages().count(), 0);
}

#[test]
fn test_search_result_keeps_page_size() {
    let mut book = AddressBook::with_page_size(NonZeroUsize::new(2).unwrap());
    for name in ["Ann", "Anton", "Andy"] {
        book.add_record(record(name, None));
    }
    let found = book.search_records("an");
    assert_eq!(found.page_size().get(), 2);
    assert_eq!(found.pages().count(), 2);
}

#[test]
fn test_days_to_birthday_properties() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
    let mut anna = record("Anna", None);
    assert_eq!(anna.days_to_birthday_on(today), None);

    anna.set_birthday(Birthday::new(15, 10).unwrap());
    assert_eq!(anna.days_to_birthday_on(today), Some(0));

    // Passed this year: counted against next year
    anna.set_birthday(Birthday::new(1, 3).unwrap());
    assert_eq!(anna.days_to_birthday_on(today), Some(137));

    for month in 1..=12 {
        anna.set_birthday(Birthday::new(1, month).unwrap());
        let days = anna.days_to_birthday_on(today).unwrap();
        assert!(days < 366);
    }
}

#[test]
fn test_edit_phone_missing_is_not_a_partial_update() {
    let mut anna = record("Anna", Some("1111111111"));
    anna.add_phone(Phone::new("2222222222").unwrap());
    let before = anna.clone();

    let err = anna.edit_phone("3333333333", "4444444444").unwrap_err();
    assert_eq!(err, DirectoryError::PhoneNotFound("3333333333".to_string()));
    assert_eq!(anna, before);
}
