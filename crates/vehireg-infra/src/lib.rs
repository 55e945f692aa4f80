//! Infrastructure layer
//!
//! File formats the records can be exported to, outside the JSON store.

pub mod records_csv;
