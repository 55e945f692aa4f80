//! Vehicle registration record and its field names

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::Error;

/// Named fields of a vehicle record, in form order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Plate,
    Brand,
    Model,
    Color,
    Chassis,
    Engine,
    OwnerId,
    OwnerName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Plate,
        Field::Brand,
        Field::Model,
        Field::Color,
        Field::Chassis,
        Field::Engine,
        Field::OwnerId,
        Field::OwnerName,
        Field::Email,
        Field::Phone,
    ];

    /// Key used in the persisted file
    pub fn key(&self) -> &'static str {
        match self {
            Field::Plate => "plate",
            Field::Brand => "brand",
            Field::Model => "model",
            Field::Color => "color",
            Field::Chassis => "chassis",
            Field::Engine => "engine",
            Field::OwnerId => "owner_id",
            Field::OwnerName => "owner_name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Key the original record files used for this field
    pub fn legacy_key(&self) -> &'static str {
        match self {
            Field::Plate => "placa",
            Field::Brand => "marca",
            Field::Model => "modelo",
            Field::Color => "color",
            Field::Chassis => "chasis",
            Field::Engine => "motor",
            Field::OwnerId => "cedula",
            Field::OwnerName => "nombre",
            Field::Email => "correo",
            Field::Phone => "telefono",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Plate => "Plate",
            Field::Brand => "Brand",
            Field::Model => "Model (year)",
            Field::Color => "Color",
            Field::Chassis => "Chassis number",
            Field::Engine => "Engine number",
            Field::OwnerId => "Owner ID",
            Field::OwnerName => "Owner name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|field| field.key() == name || field.legacy_key() == name)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// A vehicle together with its owner's identity and contact data
///
/// Every value is kept as text, including the model year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub chassis: String,
    pub engine: String,
    pub owner_id: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
}

impl VehicleRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Plate => &self.plate,
            Field::Brand => &self.brand,
            Field::Model => &self.model,
            Field::Color => &self.color,
            Field::Chassis => &self.chassis,
            Field::Engine => &self.engine,
            Field::OwnerId => &self.owner_id,
            Field::OwnerName => &self.owner_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Plate => self.plate = value,
            Field::Brand => self.brand = value,
            Field::Model => self.model = value,
            Field::Color => self.color = value,
            Field::Chassis => self.chassis = value,
            Field::Engine => self.engine = value,
            Field::OwnerId => self.owner_id = value,
            Field::OwnerName => self.owner_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    /// Field values in form order
    pub fn values(&self) -> [&str; 10] {
        Field::ALL.map(|field| self.get(field))
    }
}

/// Reads a record from its canonical keys, falling back to the legacy ones
///
/// A canonical key wins when both spellings are present. Unknown keys are
/// ignored and absent fields read as empty text.
impl<'de> Deserialize<'de> for VehicleRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut record = VehicleRecord::default();
        for field in Field::ALL {
            let value = map
                .remove(field.key())
                .or_else(|| map.remove(field.legacy_key()));
            record.set(field, text(field, value).map_err(D::Error::custom)?);
        }
        Ok(record)
    }
}

/// Accepts strings, numbers and null for a text field.
///
/// Hand-edited files sometimes carry the model year as a number.
fn text(field: Field, value: Option<serde_json::Value>) -> Result<String, String> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(format!(
            "expected text for `{}`, found {}",
            field.key(),
            other
        )),
    }
}

/// Composite key identifying a record for deletion
///
/// A stored record matches when its plate equals `plate` and either its
/// owner ID or its chassis number equals the key's. Values are compared
/// trimmed, so a record with an empty owner ID matches an empty key value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordKey {
    pub plate: String,
    pub owner_id: String,
    pub chassis: String,
}

impl RecordKey {
    pub fn new(
        plate: impl Into<String>,
        owner_id: impl Into<String>,
        chassis: impl Into<String>,
    ) -> Self {
        Self {
            plate: plate.into(),
            owner_id: owner_id.into(),
            chassis: chassis.into(),
        }
    }

    pub fn matches(&self, record: &VehicleRecord) -> bool {
        let plate = self.plate.trim();
        if record.plate.trim() != plate {
            return false;
        }
        record.owner_id.trim() == self.owner_id.trim()
            || record.chassis.trim() == self.chassis.trim()
    }
}

impl From<&VehicleRecord> for RecordKey {
    fn from(record: &VehicleRecord) -> Self {
        Self::new(
            record.plate.trim(),
            record.owner_id.trim(),
            record.chassis.trim(),
        )
    }
}
