//! Name order resolution.
//!
//! Decides whether the two leading tokens are (last, first) and swaps them
//! into canonical (first, last) order.

use super::classifier::ZIP_REGEX;
use std::fmt;
use std::str::FromStr;

/// Rule used to detect (last, first) lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderRule {
    /// A line whose final token is a five-digit zip code is in (last, first)
    /// order.
    #[default]
    TrailingZip,

    /// Names are always taken in the order they appear.
    Preserve,
}

impl OrderRule {
    /// Whether `tokens` must have their name tokens swapped under this rule.
    pub fn needs_swap(self, tokens: &[String]) -> bool {
        match self {
            Self::TrailingZip => tokens.last().is_some_and(|last| ZIP_REGEX.is_match(last)),
            Self::Preserve => false,
        }
    }
}

impl FromStr for OrderRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trailing-zip" => Ok(Self::TrailingZip),
            "preserve" => Ok(Self::Preserve),
            other => Err(format!(
                "unknown order rule '{}' (expected 'trailing-zip' or 'preserve')",
                other
            )),
        }
    }
}

impl fmt::Display for OrderRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrailingZip => write!(f, "trailing-zip"),
            Self::Preserve => write!(f, "preserve"),
        }
    }
}

/// Reorder `tokens` into canonical (first, last, ...) layout.
pub fn resolve(mut tokens: Vec<String>, rule: OrderRule) -> Vec<String> {
    if tokens.len() >= 2 && rule.needs_swap(&tokens) {
        tracing::trace!("Swapping (last, first) name tokens");
        tokens.swap(0, 1);
    }
    tokens
}
