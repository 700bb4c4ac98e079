//! Per-line result of the normalization pipeline.

use super::contact::ContactRecord;
use crate::error::ParseError;

/// Outcome of processing one input line: a record or a failure, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The line produced a complete record
    Parsed(ContactRecord),

    /// The line failed; `line` is 1-based
    Failed { line: usize, error: ParseError },
}
