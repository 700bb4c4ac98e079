//! Color value object.

use super::errors::ValidationError;
use std::fmt;

/// A color label made of ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Create a new Color from a non-empty run of ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidColor` if the input is empty or
    /// contains anything other than `a-z` / `A-Z`.
    pub fn new(color: impl Into<String>) -> Result<Self, ValidationError> {
        let color = color.into();

        if color.is_empty() || !color.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidColor(color));
        }

        Ok(Self(color))
    }

    /// Wrap text already matched by the classifier's leading-letters pattern.
    pub(crate) fn from_matched(color: &str) -> Self {
        debug_assert!(Self::new(color).is_ok());
        Self(color.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_valid() {
        assert_eq!(Color::new("red").unwrap().as_str(), "red");
        assert!(Color::new("").is_err());
        assert!(Color::new("red1").is_err());
        assert!(Color::new("aqua marine").is_err());
    }
}
