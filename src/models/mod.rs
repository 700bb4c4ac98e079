//! Data models for normalized contacts.
//!
//! This module contains the record produced for each parsable line, the
//! per-line outcome, and the aggregated result set written to disk.

pub mod contact;
pub mod outcome;
pub mod result_set;

pub use contact::ContactRecord;
pub use outcome::ParseOutcome;
pub use result_set::ResultSet;
