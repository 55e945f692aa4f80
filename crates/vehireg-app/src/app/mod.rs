//! Use cases driven by the presentation layer
//!
//! Both services borrow the same record repository; the caller owns it.

pub mod listing;
pub mod registration_service;

pub use listing::{ListingError, RecordListing};
pub use registration_service::{RegistrationError, RegistrationService};
