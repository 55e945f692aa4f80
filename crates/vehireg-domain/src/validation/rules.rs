//! Per-field format rules

use once_cell::sync::Lazy;
use regex::Regex;
use vehireg_types::Field;

/// Earliest accepted model year
pub const MIN_MODEL_YEAR: i64 = 1900;
/// Latest accepted model year
pub const MAX_MODEL_YEAR: i64 = 2026;

static PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z]{3}[0-9]{3}|[A-Z]{3}[0-9]{2}[A-Z])$").expect("valid plate regex"));
static LETTERS_AND_SPACES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-záéíóúÁÉÍÓÚñÑ\s]+$").expect("valid name regex"));
static LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-záéíóúÁÉÍÓÚñÑ]+$").expect("valid color regex"));
static CHASSIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{17}$").expect("valid chassis regex"));
static ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid engine regex"));
static OWNER_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{7,10}$").expect("valid owner id regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// How a trimmed value is rewritten before its rule runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    AsIs,
    Uppercase,
}

impl Normalize {
    pub fn apply(&self, value: &str) -> String {
        match self {
            Normalize::AsIs => value.to_string(),
            Normalize::Uppercase => value.to_uppercase(),
        }
    }
}

/// Format rule for one field
pub struct FieldRule {
    pub field: Field,
    /// Reason shown when a non-empty value fails the rule
    pub hint: &'static str,
    pub normalize: Normalize,
    check: fn(&str) -> bool,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("hint", &self.hint)
            .field("normalize", &self.normalize)
            .finish_non_exhaustive()
    }
}

impl FieldRule {
    /// Check an already trimmed and normalized value
    pub fn accepts(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

fn is_plate(value: &str) -> bool {
    PLATE_RE.is_match(value)
}

fn is_letters_and_spaces(value: &str) -> bool {
    LETTERS_AND_SPACES_RE.is_match(value)
}

fn is_model_year(value: &str) -> bool {
    value
        .parse::<i64>()
        .map(|year| (MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&year))
        .unwrap_or(false)
}

fn is_letters(value: &str) -> bool {
    LETTERS_RE.is_match(value)
}

fn is_chassis(value: &str) -> bool {
    CHASSIS_RE.is_match(value)
}

fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_RE.is_match(value)
}

fn is_owner_id(value: &str) -> bool {
    OWNER_ID_RE.is_match(value)
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// One rule per field, in `Field::ALL` order
pub static RULES: [FieldRule; 10] = [
    FieldRule {
        field: Field::Plate,
        hint: "Invalid format. e.g. ABC123 or ABC12D",
        normalize: Normalize::Uppercase,
        check: is_plate,
    },
    FieldRule {
        field: Field::Brand,
        hint: "Letters and spaces only",
        normalize: Normalize::AsIs,
        check: is_letters_and_spaces,
    },
    FieldRule {
        field: Field::Model,
        hint: "Year between 1900 and 2026",
        normalize: Normalize::AsIs,
        check: is_model_year,
    },
    FieldRule {
        field: Field::Color,
        hint: "Letters only",
        normalize: Normalize::AsIs,
        check: is_letters,
    },
    FieldRule {
        field: Field::Chassis,
        hint: "17 alphanumeric characters",
        normalize: Normalize::AsIs,
        check: is_chassis,
    },
    FieldRule {
        field: Field::Engine,
        hint: "Alphanumeric characters only",
        normalize: Normalize::AsIs,
        check: is_alphanumeric,
    },
    FieldRule {
        field: Field::OwnerId,
        hint: "7-10 digits",
        normalize: Normalize::AsIs,
        check: is_owner_id,
    },
    FieldRule {
        field: Field::OwnerName,
        hint: "Letters and spaces only",
        normalize: Normalize::AsIs,
        check: is_letters_and_spaces,
    },
    FieldRule {
        field: Field::Email,
        hint: "Format: user@domain.com",
        normalize: Normalize::AsIs,
        check: is_email,
    },
    FieldRule {
        field: Field::Phone,
        hint: "10 digits",
        normalize: Normalize::AsIs,
        check: is_phone,
    },
];

/// Look up the rule for a field
pub fn rule_for(field: Field) -> &'static FieldRule {
    // RULES is laid out in Field::ALL order
    &RULES[field as usize]
}
