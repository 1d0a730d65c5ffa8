//! Fixture-driven ingestion tests.
//!
//! Rows from `tests/fixtures/contacts.csv` go through the same
//! `ContactRegistry::add` path as any other caller.

use contact_manager::fixtures::DEFAULT_DELIMITER;
use contact_manager::{
    parse_delimited, read_delimited, Contact, ContactField, ContactRegistry, FixtureRow,
    ValidationPolicy,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/contacts.csv")
}

fn load_fixture() -> Vec<FixtureRow> {
    let file = File::open(fixture_path()).unwrap();
    read_delimited(BufReader::new(file), DEFAULT_DELIMITER).unwrap()
}

#[test]
fn test_fixture_parses_every_record() {
    let rows = load_fixture();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].line, 3);
}

#[test]
fn test_fixture_ingestion_presence_only() {
    let mut registry = ContactRegistry::new();
    let rejected: Vec<(usize, ContactField)> = registry
        .ingest(&load_fixture())
        .into_iter()
        .map(|rejection| (rejection.line, rejection.error.field()))
        .collect();

    assert_eq!(
        rejected,
        vec![
            (6, ContactField::FirstName),
            (7, ContactField::LastName),
            (8, ContactField::PhoneNumber),
        ]
    );
    assert_eq!(
        registry.get_all_contacts(),
        &[
            Contact::new("John", "Doe", "0123456789"),
            Contact::new("Jane", "Roe", "+1 (555) 123-4567"),
            Contact::new("John", "Doe", "0123456789"),
            Contact::new("", "Doe", "0123456789"),
            Contact::new("Mary Ann", "O'Neil", "020 7946 0958"),
        ]
    );
}

#[test]
fn test_fixture_ingestion_reject_blank() {
    let mut registry = ContactRegistry::with_policy(ValidationPolicy::RejectBlank);
    let rows = load_fixture();
    let rejected = registry.ingest(&rows);

    assert_eq!(rows.len() - rejected.len(), 4);
    assert_eq!(registry.len(), 4);
    assert!(registry.iter().all(|c| !c.first_name().is_empty()));
}

#[test]
fn test_inline_fixture_rows() {
    let input = "\
        John, Doe, 0123456789
        Jane, Doe, 9876543210
    ";
    let rows = parse_delimited(input, DEFAULT_DELIMITER).unwrap();

    for row in rows {
        let mut registry = ContactRegistry::new();
        registry.add(&row.contact).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_all_contacts()[0].last_name(), "Doe");
    }
}
