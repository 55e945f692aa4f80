//! Domain layer: field validation and persistence contracts

pub mod repository;
pub mod validation;

pub use repository::{DeleteOutcome, LoadReport, LoadSource, RecordRepository};
pub use validation::{
    rule_for, validate_field, validate_form, FieldError, FieldRule, RawForm, ValidationErrors,
};
