//! Contact Normalizer - batch normalization of free-form contact records.
//!
//! Each input line holds a name, a phone number, a zip code, and a color in
//! inconsistent order and punctuation. Lines are normalized independently into
//! validated records; the lines that cannot be parsed are reported by number.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for phone, zip code, and color
//! - **models**: Contact record, per-line outcome, and result set
//! - **pipeline**: Standardizer, order resolver, classifier, assembler, driver
//! - **aggregate**: Sorting and partitioning of outcomes into a result set
//! - **io**: Reading the input file and writing the JSON output
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Per-run counters
//!
//! # Example
//!
//! ```
//! use contact_normalizer::{normalize_str, Config};
//!
//! let result = normalize_str(
//!     "Ria Tillotson, aqua marine, 97671, 196 910 5548\nnot a contact\n",
//!     &Config::default(),
//! );
//! assert_eq!(result.entries()[0].phone, "196-910-5548");
//! assert_eq!(result.errors(), &[2]);
//! ```

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod metrics;
pub mod models;
pub mod pipeline;

pub use aggregate::aggregate;
pub use config::{Config, ConfigOverrides};
pub use error::{ConfigError, NormalizeError, ParseError};
pub use io::run;
pub use metrics::{MetricsSummary, PipelineMetrics};
pub use models::{ContactRecord, ParseOutcome, ResultSet};
pub use pipeline::{FieldKind, Normalizer, OrderRule};

/// Normalize an in-memory document, one record per line.
pub fn normalize_str(input: &str, config: &Config) -> ResultSet {
    normalize_with(&Normalizer::new(config.order_rule), input)
}

/// Normalize a document with an existing normalizer, accumulating its metrics.
pub fn normalize_with(normalizer: &Normalizer, input: &str) -> ResultSet {
    aggregate(normalizer.process_document(input))
}
