//! ZipCode value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of digits in a valid zip code.
pub const ZIP_DIGITS: usize = 5;

/// A five-digit postal code.
///
/// Leading zeros are significant, so the code is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZipCode` unless the input is exactly
    /// five ASCII digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();

        if zip.len() != ZIP_DIGITS || !zip.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidZipCode(zip));
        }

        Ok(Self(zip))
    }

    /// Wrap text already matched by the classifier's five-digit pattern.
    pub(crate) fn from_matched(zip: &str) -> Self {
        debug_assert!(Self::new(zip).is_ok());
        Self(zip.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
