//! Field validation for the registration form
//!
//! Every field is checked on its own: the value is trimmed, rejected when
//! empty, normalized and then matched against the field's rule. A form pass
//! checks all ten fields and collects every failure before reporting.

mod rules;

pub use rules::{rule_for, FieldRule, Normalize, MAX_MODEL_YEAR, MIN_MODEL_YEAR, RULES};

use std::collections::BTreeMap;
use thiserror::Error;
use vehireg_types::{Field, VehicleRecord};

/// Reason a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Required field")]
    Required,

    #[error("{hint}")]
    Invalid { hint: &'static str },
}

/// Validate one field, returning the value to store
pub fn validate_field(field: Field, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }

    let rule = rule_for(field);
    let value = rule.normalize.apply(trimmed);
    if rule.accepts(&value) {
        Ok(value)
    } else {
        Err(FieldError::Invalid { hint: rule.hint })
    }
}

/// Raw text collected by a presentation layer, one entry per field
///
/// Fields that were never set read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    values: BTreeMap<Field, String>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl From<&VehicleRecord> for RawForm {
    fn from(record: &VehicleRecord) -> Self {
        Field::ALL
            .into_iter()
            .fold(RawForm::new(), |form, field| form.with(field, record.get(field)))
    }
}

/// All field failures of one form pass, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(Field, FieldError)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, err)| err)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|(field, _)| *field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldError)> {
        self.errors.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, err)| format!("{}: {}", field.label(), err))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate every field of a form
///
/// Yields a complete record only when all fields pass.
pub fn validate_form(form: &RawForm) -> Result<VehicleRecord, ValidationErrors> {
    let mut record = VehicleRecord::default();
    let mut errors = ValidationErrors::default();

    for field in Field::ALL {
        match validate_field(field, form.get(field)) {
            Ok(value) => record.set(field, value),
            Err(err) => errors.errors.push((field, err)),
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(errors)
    }
}
