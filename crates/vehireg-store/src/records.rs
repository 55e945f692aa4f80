//! JSON file store for vehicle records
//!
//! The whole collection lives in one file as an array of flat objects.
//! Every operation reads the file, changes the collection in memory and
//! writes the file back. Nothing is cached and nothing is locked.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use vehireg_domain::repository::{DeleteOutcome, LoadReport, LoadSource, RecordRepository};
use vehireg_types::{Error, RecordKey, Result, StoreError, VehicleRecord};

/// Default file name inside a store directory
pub const RECORDS_FILE_NAME: &str = "vehicle_records.json";

const INDENT: &[u8] = b"    ";

/// File-backed record collection
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    store_path: PathBuf,
}

impl JsonRecordStore {
    /// Open a store backed by `store_path`
    ///
    /// The file itself is created on the first write.
    pub fn open(store_path: PathBuf) -> Result<Self> {
        if let Some(parent) = store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { store_path })
    }

    /// Open the default records file inside `store_dir`
    pub fn open_in(store_dir: PathBuf) -> Result<Self> {
        Self::open(store_dir.join(RECORDS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Number of records currently stored
    pub fn count(&self) -> usize {
        self.read_report().records.len()
    }

    fn read_report(&self) -> LoadReport {
        let content = match fs::read_to_string(&self.store_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.store_path.display(), "records file does not exist yet");
                return LoadReport::empty(LoadSource::Missing);
            }
            Err(e) => {
                let err = StoreError::Read {
                    path: self.store_path.clone(),
                    source: e,
                };
                warn!("{}; treating collection as empty", err);
                return LoadReport::empty(LoadSource::Corrupt {
                    reason: err.to_string(),
                });
            }
        };

        if content.trim().is_empty() {
            return LoadReport::empty(LoadSource::Empty);
        }

        match serde_json::from_str::<Vec<VehicleRecord>>(&content) {
            Ok(records) => {
                debug!(count = records.len(), "records loaded");
                LoadReport::new(records, LoadSource::File)
            }
            Err(e) => {
                warn!(
                    path = %self.store_path.display(),
                    "failed to decode records: {}; treating collection as empty",
                    e
                );
                LoadReport::empty(LoadSource::Corrupt {
                    reason: format!("Failed to decode {}: {}", self.store_path.display(), e),
                })
            }
        }
    }

    /// Sibling file the collection is written to before it replaces the store
    fn temp_path(&self) -> PathBuf {
        self.store_path.with_extension("tmp")
    }

    /// Write the whole collection, replacing the file via a `.tmp` sibling
    fn persist(&self, records: &[VehicleRecord]) -> Result<()> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.store_path.clone(),
            source,
        };
        let tmp = self.temp_path();

        let file = File::create(&tmp).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut serializer).map_err(|e| {
            if e.is_io() {
                write_err(io::Error::from(e))
            } else {
                StoreError::Encode {
                    path: self.store_path.clone(),
                    source: e,
                }
            }
        })?;
        writer.flush().map_err(write_err)?;
        drop(writer);

        if let Err(e) = fs::rename(&tmp, &self.store_path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e).into());
        }
        Ok(())
    }
}

impl RecordRepository for JsonRecordStore {
    fn load(&self) -> LoadReport {
        self.read_report()
    }

    fn save(&self, record: &VehicleRecord) -> std::result::Result<(), Error> {
        let report = self.read_report();
        if let Some(reason) = report.warning() {
            warn!("overwriting unreadable records file: {}", reason);
        }

        let mut records = report.into_records();
        records.push(record.clone());
        self.persist(&records)?;
        info!(plate = %record.plate, total = records.len(), "record saved");
        Ok(())
    }

    fn delete(&self, key: &RecordKey) -> std::result::Result<DeleteOutcome, Error> {
        let mut records = self.read_report().into_records();

        let Some(index) = records.iter().position(|r| key.matches(r)) else {
            debug!(plate = %key.plate, "no record matched delete key");
            return Ok(DeleteOutcome::NotFound);
        };

        let removed = records.remove(index);
        self.persist(&records)?;
        info!(plate = %removed.plate, remaining = records.len(), "record deleted");
        Ok(DeleteOutcome::Deleted(removed))
    }
}
