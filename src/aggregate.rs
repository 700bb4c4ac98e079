//! Aggregation of per-line outcomes into the final result set.

use crate::models::{ContactRecord, ParseOutcome, ResultSet};

/// Partition outcomes into records and failed line numbers.
///
/// Records are stably sorted by last name, then first name (case-sensitive);
/// line numbers are sorted ascending regardless of the order they arrive in.
pub fn aggregate(outcomes: impl IntoIterator<Item = ParseOutcome>) -> ResultSet {
    let mut entries: Vec<ContactRecord> = Vec::new();
    let mut errors: Vec<usize> = Vec::new();

    for outcome in outcomes {
        match outcome {
            ParseOutcome::Parsed(record) => entries.push(record),
            ParseOutcome::Failed { line, .. } => errors.push(line),
        }
    }

    entries.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
    errors.sort_unstable();

    ResultSet::from_sorted(entries, errors)
}
