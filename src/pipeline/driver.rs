//! Per-line pipeline driver.
//!
//! Runs standardize -> reorder -> classify -> assemble for each line. A
//! failing stage ends processing for that line only; the next line starts
//! from fresh state.

use super::assembler::assemble;
use super::classifier::classify;
use super::order::{self, OrderRule};
use super::standardizer::{standardize, EXPECTED_FIELDS};
use crate::error::ParseResult;
use crate::metrics::PipelineMetrics;
use crate::models::{ContactRecord, ParseOutcome};

/// Leading tokens that hold the name.
const NAME_FIELDS: usize = 2;

/// Line normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    order_rule: OrderRule,
    metrics: PipelineMetrics,
}

impl Normalizer {
    /// Create a normalizer using the given order rule.
    pub fn new(order_rule: OrderRule) -> Self {
        Self {
            order_rule,
            metrics: PipelineMetrics::new(),
        }
    }

    /// Counters for every line processed by this normalizer.
    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    /// Process one line. `line_number` is 1-based.
    pub fn process_line(&self, line_number: usize, raw: &str) -> ParseOutcome {
        match self.run_stages(raw) {
            Ok(record) => {
                self.metrics.record_accepted();
                ParseOutcome::Parsed(record)
            }
            Err(error) => {
                tracing::debug!(
                    line = line_number,
                    kind = error.kind(),
                    "Line rejected: {}",
                    error
                );
                self.metrics.record_failure(&error);
                ParseOutcome::Failed {
                    line: line_number,
                    error,
                }
            }
        }
    }

    /// Process every line of `input` in order.
    pub fn process_document(&self, input: &str) -> Vec<ParseOutcome> {
        input
            .lines()
            .enumerate()
            .map(|(index, raw)| self.process_line(index + 1, raw))
            .collect()
    }

    fn run_stages(&self, raw: &str) -> ParseResult<ContactRecord> {
        let tokens = standardize(raw, EXPECTED_FIELDS)?;
        tracing::trace!(?tokens, "Standardized");

        let mut tokens = order::resolve(tokens, self.order_rule);
        tracing::trace!(?tokens, "Reordered");

        let fields = classify(&tokens[NAME_FIELDS..])?;
        tracing::trace!(?fields, "Classified");

        let mut names = tokens.drain(..NAME_FIELDS);
        let first_name = names.next().unwrap_or_default();
        let last_name = names.next().unwrap_or_default();

        Ok(assemble(first_name, last_name, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::pipeline::FieldKind;

    fn record(first: &str, last: &str, phone: &str, zip: &str, color: &str) -> ContactRecord {
        ContactRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: phone.to_string(),
            zip_code: zip.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_fused_name_first_last_line() {
        let normalizer = Normalizer::default();
        let outcome = normalizer.process_line(1, "Ria Tillotson, aqua marine, 97671, 196 910 5548");
        assert_eq!(
            outcome,
            ParseOutcome::Parsed(record("Ria", "Tillotson", "196-910-5548", "97671", "aquamarine"))
        );
    }

    #[test]
    fn test_last_first_line_with_trailing_zip() {
        let normalizer = Normalizer::default();
        let outcome =
            normalizer.process_line(1, "Tillotson, Ria, aqua marine, (196)9105548, 97671");
        assert_eq!(
            outcome,
            ParseOutcome::Parsed(record("Ria", "Tillotson", "196-910-5548", "97671", "aquamarine"))
        );
    }

    #[test]
    fn test_preserve_rule_keeps_written_order() {
        let normalizer = Normalizer::new(OrderRule::Preserve);
        let outcome =
            normalizer.process_line(1, "Tillotson, Ria, aqua marine, (196)9105548, 97671");
        assert_eq!(
            outcome,
            ParseOutcome::Parsed(record("Tillotson", "Ria", "196-910-5548", "97671", "aquamarine"))
        );
    }

    #[test]
    fn test_missing_phone_fails_with_line_number() {
        let normalizer = Normalizer::default();
        let outcome = normalizer.process_line(7, "Ria, Tillotson, aqua marine, 97671, 12345");
        assert_eq!(
            outcome,
            ParseOutcome::Failed {
                line: 7,
                error: ParseError::MissingField(FieldKind::Phone),
            }
        );
    }

    #[test]
    fn test_failure_does_not_leak_into_next_line() {
        let normalizer = Normalizer::default();
        let outcomes = normalizer.process_document(
            "garbage\nJames Murphy, yellow, 83880, 018 154 6474\n",
        );
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], ParseOutcome::Failed { line: 1, .. }));
        assert_eq!(
            outcomes[1],
            ParseOutcome::Parsed(record("James", "Murphy", "018-154-6474", "83880", "yellow"))
        );
    }

    #[test]
    fn test_canonical_output_is_idempotent() {
        let normalizer = Normalizer::default();
        let inputs = [
            "Ria, Tillotson, 1969105548, 97671, aquamarine",
            "Tillotson, Ria, aqua marine, (196)9105548, 97671",
            "Booker T., Washington, 87360, 373 781 7380, yellow",
        ];

        for input in inputs {
            let first = match normalizer.process_line(1, input) {
                ParseOutcome::Parsed(record) => record,
                other => panic!("Expected parsed record for {:?}, got {:?}", input, other),
            };
            let second = normalizer.process_line(1, &first.to_canonical_line());
            assert_eq!(second, ParseOutcome::Parsed(first));
        }
    }

    #[test]
    fn test_metrics_track_lines() {
        let normalizer = Normalizer::default();
        normalizer.process_document("a\nRia, Tillotson, 1969105548, 97671, red\n");
        assert_eq!(normalizer.metrics().lines_total(), 2);
        assert_eq!(normalizer.metrics().records_accepted(), 1);
    }
}
