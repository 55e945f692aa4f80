//! Repository adapters for persistence layer

use std::path::PathBuf;

use vehireg_store::JsonRecordStore;
use vehireg_types::Result;

use crate::config::Config;

/// Open the record store configured for this user
pub fn open_record_store(config: &Config) -> Result<JsonRecordStore> {
    let records_file = config.records_file()?;
    JsonRecordStore::open(records_file)
}

/// Open the record store at a custom file path
pub fn open_record_store_at(records_file: PathBuf) -> Result<JsonRecordStore> {
    JsonRecordStore::open(records_file)
}
