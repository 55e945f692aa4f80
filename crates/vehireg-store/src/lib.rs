//! Persistent store for vehicle records

pub mod records;

pub use records::{JsonRecordStore, RECORDS_FILE_NAME};
