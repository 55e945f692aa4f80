//! Record listing - the table view over stored records
//!
//! Rows are a snapshot of the last load. Every change goes through the
//! repository and is followed by a fresh load.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};
use vehireg_domain::repository::{DeleteOutcome, LoadReport, LoadSource, RecordRepository};
use vehireg_infra::records_csv::export_records;
use vehireg_types::{RecordKey, VehicleRecord};

/// Errors specific to the listing
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("No record at row {0}")]
    RowOutOfRange(usize),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

/// Snapshot of the stored records, refreshed on demand
pub struct RecordListing<'a, R: RecordRepository + ?Sized> {
    repo: &'a R,
    report: LoadReport,
}

impl<'a, R: RecordRepository + ?Sized> RecordListing<'a, R> {
    /// Create a listing and load it immediately
    pub fn new(repo: &'a R) -> Self {
        let report = repo.load();
        Self { repo, report }
    }

    /// Reload every record from the repository
    pub fn refresh(&mut self) -> &LoadReport {
        self.report = self.repo.load();
        if let Some(reason) = self.report.warning() {
            warn!("listing loaded no records: {}", reason);
        }
        &self.report
    }

    pub fn rows(&self) -> &[VehicleRecord] {
        self.report.records()
    }

    pub fn row(&self, index: usize) -> Option<&VehicleRecord> {
        self.report.records().get(index)
    }

    pub fn count(&self) -> usize {
        self.report.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.report.records().is_empty()
    }

    pub fn source(&self) -> &LoadSource {
        &self.report.source
    }

    /// Reason the last load came back empty, if storage was unreadable
    pub fn warning(&self) -> Option<&str> {
        self.report.warning()
    }

    /// Delete the record shown at `index`, then reload
    ///
    /// The row's plate, owner ID and chassis form the match key, so the
    /// stored record removed is the first one matching them.
    pub fn delete_row(&mut self, index: usize) -> Result<DeleteOutcome, ListingError> {
        let key = self
            .row(index)
            .map(RecordKey::from)
            .ok_or(ListingError::RowOutOfRange(index))?;
        self.delete(&key)
    }

    /// Delete the first stored record matching `key`, then reload
    pub fn delete(&mut self, key: &RecordKey) -> Result<DeleteOutcome, ListingError> {
        let outcome = self
            .repo
            .delete(key)
            .map_err(|e| ListingError::StoreError(e.to_string()))?;
        if outcome == DeleteOutcome::NotFound {
            info!(plate = %key.plate, "record to delete was not found");
        }
        self.refresh();
        Ok(outcome)
    }

    /// Write the current rows to a CSV file
    pub fn export_csv(&self, path: &Path) -> Result<usize, ListingError> {
        export_records(path, self.rows()).map_err(|e| ListingError::ExportFailed(e.to_string()))
    }
}
