//! End-to-end flow: entry form -> store -> listing
//!
//! The form and the listing share one store handle, as the binary wires them.

use std::fs;
use tempfile::tempdir;
use vehireg_app::app::{RecordListing, RegistrationError, RegistrationService};
use vehireg_app::repository::open_record_store_at;
use vehireg_domain::repository::{DeleteOutcome, RecordRepository};
use vehireg_domain::validation::{FieldError, RawForm};
use vehireg_types::{Field, RecordKey};

fn form(plate: &str, owner_id: &str, chassis: &str) -> RawForm {
    RawForm::new()
        .with(Field::Plate, plate)
        .with(Field::Brand, "Volkswagen")
        .with(Field::Model, "2014")
        .with(Field::Color, "Negro")
        .with(Field::Chassis, chassis)
        .with(Field::Engine, "CLS123456")
        .with(Field::OwnerId, owner_id)
        .with(Field::OwnerName, "Valentina Cárdenas")
        .with(Field::Email, "vale.cardenas@correo.com.co")
        .with(Field::Phone, "3187654321")
}

#[test]
fn test_register_list_delete() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = open_record_store_at(dir.path().join("data").join("records.json"))
        .expect("Failed to open store");
    let registration = RegistrationService::new(&store);

    let first = registration
        .submit(&form("abc123", "1032456789", "WVWZZZ6RZEY123456"))
        .expect("first record should be saved");
    let second = registration
        .submit(&form("DEF45G", "79555444", "WVWZZZ6RZEY654321"))
        .expect("second record should be saved");

    let mut listing = RecordListing::new(&store);
    assert_eq!(listing.rows(), &[first.clone(), second.clone()]);

    // Plate and owner ID identify the first record
    let outcome = listing
        .delete(&RecordKey::new("ABC123", "1032456789", ""))
        .expect("delete should reach storage");
    assert_eq!(outcome, DeleteOutcome::Deleted(first));
    assert_eq!(listing.rows(), &[second]);

    // Same plate with unrelated secondary fields matches nothing
    let outcome = listing
        .delete(&RecordKey::new("DEF45G", "1111111", "XXXXXXXXXXXXXXXXX"))
        .expect("delete should reach storage");
    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(listing.count(), 1);
}

#[test]
fn test_rejected_form_leaves_store_untouched() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = open_record_store_at(dir.path().join("records.json")).expect("Failed to open store");
    let registration = RegistrationService::new(&store);

    let bad = form("AB123C", "123", "SHORT").with(Field::Model, "1899");
    let err = registration.submit(&bad).unwrap_err();
    match err {
        RegistrationError::Invalid(errors) => {
            assert_eq!(
                errors.fields(),
                vec![Field::Plate, Field::Model, Field::Chassis, Field::OwnerId]
            );
            assert_eq!(
                errors.get(Field::Chassis),
                Some(&FieldError::Invalid {
                    hint: "17 alphanumeric characters"
                })
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(!store.path().exists());
    assert!(store.load().records().is_empty());
}

#[test]
fn test_corrupt_file_recovers_on_next_save() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("records.json");
    fs::write(&path, "not json at all").unwrap();
    let store = open_record_store_at(path.clone()).expect("Failed to open store");

    let listing = RecordListing::new(&store);
    assert!(listing.is_empty());
    assert!(listing.warning().is_some());

    let registration = RegistrationService::new(&store);
    registration
        .submit(&form("QWE987", "10101010", "1FTFW1ET5DFC12345"))
        .expect("save should replace unreadable content");
    let report = store.load();
    assert!(!report.is_corrupt());
    assert_eq!(report.records().len(), 1);
}

#[test]
fn test_accented_text_survives_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("records.json");
    let store = open_record_store_at(path.clone()).expect("Failed to open store");

    let saved = RegistrationService::new(&store)
        .submit(&form("NAB123", "10101010", "1FTFW1ET5DFC12345").with(Field::Brand, "Citroén"))
        .expect("record should be saved");
    assert_eq!(saved.brand, "Citroén");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Citroén"));
    assert!(content.contains("Valentina Cárdenas"));
    assert_eq!(store.load().into_records(), vec![saved]);
}
