//! End-to-end test utilities and shared fixtures.
//!
//! Helpers here write input documents to temporary files, run the normalizer,
//! and read the JSON output back.

use contact_normalizer::{ContactRecord, ResultSet};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

/// A temporary directory holding one input file and one output path.
pub struct Workspace {
    _dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    /// Create a workspace whose input file contains `contents`.
    pub fn with_input(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("contacts.txt");
        let output = dir.path().join("result.json");
        std::fs::write(&input, contents).expect("Failed to write input file");

        Self {
            _dir: dir,
            input,
            output,
        }
    }

    /// Parse the output file as a result set.
    #[allow(dead_code)]
    pub fn read_result(&self) -> ResultSet {
        read_result(&self.output)
    }

    /// Parse the output file as untyped JSON.
    #[allow(dead_code)]
    pub fn read_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(&self.output).expect("Failed to read output file");
        serde_json::from_str(&text).expect("Output is not valid JSON")
    }
}

/// Parse a result set from a JSON file.
pub fn read_result(path: &Path) -> ResultSet {
    let text = std::fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&text).expect("Output is not a valid result set")
}

/// Build a record from its five output fields.
#[allow(dead_code)]
pub fn record(first: &str, last: &str, phone: &str, zip: &str, color: &str) -> ContactRecord {
    ContactRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: phone.to_string(),
        zip_code: zip.to_string(),
        color: color.to_string(),
    }
}
