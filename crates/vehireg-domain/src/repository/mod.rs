//! Repository trait definitions for record persistence

use vehireg_types::Error;
use vehireg_types::{RecordKey, VehicleRecord};

/// Where the records of a load came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// No storage exists yet
    Missing,
    /// Storage exists but holds no content
    Empty,
    /// Records were read from storage
    File,
    /// Storage content could not be read or parsed; treated as empty
    Corrupt { reason: String },
}

/// Result of reading the whole collection
///
/// Reading never fails: problems degrade to an empty collection and are
/// reported through `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<VehicleRecord>,
    pub source: LoadSource,
}

impl LoadReport {
    pub fn new(records: Vec<VehicleRecord>, source: LoadSource) -> Self {
        Self { records, source }
    }

    pub fn empty(source: LoadSource) -> Self {
        Self::new(Vec::new(), source)
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<VehicleRecord> {
        self.records
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self.source, LoadSource::Corrupt { .. })
    }

    /// Reason for a corrupt load, if any
    pub fn warning(&self) -> Option<&str> {
        match &self.source {
            LoadSource::Corrupt { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}

/// Outcome of a delete that reached storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The first matching record was removed
    Deleted(VehicleRecord),
    /// No stored record matched the key
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}

/// Repository for vehicle records
///
/// Implementations rewrite the whole collection on every change.
pub trait RecordRepository {
    /// Read every stored record in insertion order
    fn load(&self) -> LoadReport;

    /// Append one record
    fn save(&self, record: &VehicleRecord) -> Result<(), Error>;

    /// Remove the first record matching `key`
    fn delete(&self, key: &RecordKey) -> Result<DeleteOutcome, Error>;
}
