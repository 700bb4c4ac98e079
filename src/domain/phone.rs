//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Width of each hyphen-separated group in the formatted number.
const GROUP_WIDTH: usize = 3;

/// A type-safe wrapper for ten-digit phone numbers.
///
/// The wrapped value holds the bare digits exactly as they appeared in the
/// standardized input; [`PhoneNumber::formatted`] renders the output form.
///
/// # Example
///
/// ```
/// use contact_normalizer::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1969105548").unwrap();
/// assert_eq!(phone.formatted(), "196-910-5548");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly ten characters
    /// - Every character is an ASCII digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Wrap text already matched by the classifier's ten-digit pattern.
    pub(crate) fn from_matched(phone: &str) -> Self {
        debug_assert!(Self::new(phone).is_ok());
        Self(phone.to_string())
    }

    /// Get the bare digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Render the number as `NNN-NNN-NNNN`.
    ///
    /// Groups of three digits are taken from the start up to (but not
    /// including) the final digit and joined with hyphens; the final digit
    /// is then appended to the last group.
    pub fn formatted(&self) -> String {
        let digits = self.0.as_str();
        let last = digits.len() - 1;

        let groups: Vec<&str> = (0..last)
            .step_by(GROUP_WIDTH)
            .map(|start| &digits[start..(start + GROUP_WIDTH).min(last)])
            .collect();

        let mut formatted = groups.join("-");
        formatted.push_str(&digits[last..]);
        formatted
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
