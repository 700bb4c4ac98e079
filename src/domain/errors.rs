//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided zip code is not exactly five digits.
    InvalidZipCode(String),

    /// The provided color does not start with an alphabetic run.
    InvalidColor(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidZipCode(zip) => write!(f, "Invalid zip code: {}", zip),
            Self::InvalidColor(color) => write!(f, "Invalid color: {}", color),
        }
    }
}

impl std::error::Error for ValidationError {}
