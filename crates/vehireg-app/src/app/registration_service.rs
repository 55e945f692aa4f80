//! Registration Service - submit handler of the entry form
//!
//! 1. Validate every field, collecting all failures
//! 2. On full validity, append the record to the repository
//! 3. Return the stored record or the reason it was not stored

use thiserror::Error;
use tracing::{debug, warn};
use vehireg_domain::repository::RecordRepository;
use vehireg_domain::validation::{validate_field, validate_form, FieldError, RawForm, ValidationErrors};
use vehireg_types::{Field, VehicleRecord};

/// Errors specific to the registration service
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Invalid fields: {0}")]
    Invalid(ValidationErrors),

    #[error("Could not save the record: {0}")]
    StoreError(String),
}

impl RegistrationError {
    /// Field failures, when the form was rejected
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RegistrationError::Invalid(errors) => Some(errors),
            RegistrationError::StoreError(_) => None,
        }
    }
}

/// Validates form input and stores complete records
pub struct RegistrationService<'a, R: RecordRepository + ?Sized> {
    repo: &'a R,
}

impl<'a, R: RecordRepository + ?Sized> RegistrationService<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Check a single field as the user types
    pub fn check_field(&self, field: Field, raw: &str) -> Result<String, FieldError> {
        validate_field(field, raw)
    }

    /// Validate the whole form and save it when every field passes
    ///
    /// Nothing is written when any field fails.
    pub fn submit(&self, form: &RawForm) -> Result<VehicleRecord, RegistrationError> {
        let record = validate_form(form).map_err(|errors| {
            debug!(failed = errors.len(), "form rejected");
            RegistrationError::Invalid(errors)
        })?;

        self.repo.save(&record).map_err(|e| {
            warn!(plate = %record.plate, "failed to save record: {}", e);
            RegistrationError::StoreError(e.to_string())
        })?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;
    use vehireg_domain::repository::{DeleteOutcome, LoadReport, LoadSource};
    use vehireg_store::JsonRecordStore;
    use vehireg_types::{Error, RecordKey};

    /// Repository whose writes always fail
    #[derive(Default)]
    struct ReadOnlyRepo {
        save_calls: Cell<usize>,
    }

    impl RecordRepository for ReadOnlyRepo {
        fn load(&self) -> LoadReport {
            LoadReport::empty(LoadSource::Missing)
        }

        fn save(&self, _record: &VehicleRecord) -> Result<(), Error> {
            self.save_calls.set(self.save_calls.get() + 1);
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn delete(&self, _key: &RecordKey) -> Result<DeleteOutcome, Error> {
            Ok(DeleteOutcome::NotFound)
        }
    }

    fn filled_form() -> RawForm {
        RawForm::new()
            .with(Field::Plate, " hjk45l ")
            .with(Field::Brand, "Toyota")
            .with(Field::Model, "2009")
            .with(Field::Color, "Blanco")
            .with(Field::Chassis, "JTDBR32E720123456")
            .with(Field::Engine, "1NZ987654")
            .with(Field::OwnerId, "43123456")
            .with(Field::OwnerName, "Camila Ríos")
            .with(Field::Email, "camila.rios@correo.com")
            .with(Field::Phone, "3012223344")
    }

    #[test]
    fn test_submit_saves_normalized_record() {
        let dir = tempdir().unwrap();
        let store = JsonRecordStore::open_in(dir.path().to_path_buf()).unwrap();
        let service = RegistrationService::new(&store);

        let record = service.submit(&filled_form()).unwrap();
        assert_eq!(record.plate, "HJK45L");

        let stored = store.load().into_records();
        assert_eq!(stored, vec![record]);
    }

    #[test]
    fn test_invalid_form_is_not_saved() {
        let repo = ReadOnlyRepo::default();
        let service = RegistrationService::new(&repo);
        let form = filled_form()
            .with(Field::Email, "camila@correo")
            .with(Field::OwnerId, "");

        let err = service.submit(&form).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.fields(), vec![Field::OwnerId, Field::Email]);
        assert_eq!(repo.save_calls.get(), 0);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let repo = ReadOnlyRepo::default();
        let service = RegistrationService::new(&repo);

        let err = service.submit(&filled_form()).unwrap_err();
        assert!(matches!(err, RegistrationError::StoreError(_)));
        assert!(err.validation_errors().is_none());
        assert_eq!(repo.save_calls.get(), 1);
    }

    #[test]
    fn test_check_field() {
        let repo = ReadOnlyRepo::default();
        let service = RegistrationService::new(&repo);
        assert_eq!(service.check_field(Field::Plate, "xyz987").unwrap(), "XYZ987");
        assert_eq!(
            service.check_field(Field::Phone, " "),
            Err(FieldError::Required)
        );
    }
}
