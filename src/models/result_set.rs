//! Aggregated output of a normalization run.

use super::contact::ContactRecord;
use serde::{Deserialize, Serialize};

/// Sorted records plus the line numbers that failed to parse.
///
/// Both keys are always serialized, even when empty. Built once by
/// [`crate::aggregate::aggregate`]; fields are read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResultSet {
    entries: Vec<ContactRecord>,
    errors: Vec<usize>,
}

impl ResultSet {
    /// Records sorted by (last name, first name).
    pub fn entries(&self) -> &[ContactRecord] {
        &self.entries
    }

    /// 1-based line numbers of unparsable lines, ascending.
    pub fn errors(&self) -> &[usize] {
        &self.errors
    }

    pub(crate) fn from_sorted(entries: Vec<ContactRecord>, errors: Vec<usize>) -> Self {
        Self { entries, errors }
    }
}
