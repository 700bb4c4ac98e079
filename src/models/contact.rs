//! Contact record produced by the normalization pipeline.

use serde::{Deserialize, Serialize};

/// A fully classified and validated contact.
///
/// Every field is present; a line that cannot fill all of them never becomes
/// a `ContactRecord`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number formatted as `NNN-NNN-NNNN`
    pub phone: String,

    /// Five-digit postal code
    pub zip_code: String,

    /// Color label (letters only)
    pub color: String,
}

impl ContactRecord {
    /// Render the record as a comma-separated line in canonical order
    /// (first, last, phone, zip, color).
    ///
    /// Feeding this line back through the pipeline yields an equal record.
    pub fn to_canonical_line(&self) -> String {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.phone.as_str(),
            self.zip_code.as_str(),
            self.color.as_str(),
        ]
        .join(",")
    }
}
