//! Field classification.
//!
//! Maps the unordered trailing tokens of a line to phone, zip, and color by
//! testing each token against an ordered list of patterns.

use crate::domain::{Color, PhoneNumber, ZipCode};
use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Semantic category of a trailing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Phone,
    Zip,
    Color,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Phone => write!(f, "phone"),
            FieldKind::Zip => write!(f, "zip"),
            FieldKind::Color => write!(f, "color"),
        }
    }
}

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// Exactly five ASCII digits. Also used by the order resolver.
pub(crate) static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("Failed to compile zip regex"));

static COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+").expect("Failed to compile color regex"));

/// Patterns in priority order. A token is assigned to the first match only.
fn category_patterns() -> [(FieldKind, &'static Regex); 3] {
    [
        (FieldKind::Phone, &*PHONE_REGEX),
        (FieldKind::Zip, &*ZIP_REGEX),
        (FieldKind::Color, &*COLOR_REGEX),
    ]
}

/// The three classified, validated fields of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFields {
    pub phone: PhoneNumber,
    pub zip_code: ZipCode,
    pub color: Color,
}

/// Find the category of a single token.
///
/// Returns the category and the matched text (for colors, the leading
/// alphabetic run).
pub fn classify_token(token: &str) -> Option<(FieldKind, &str)> {
    category_patterns()
        .into_iter()
        .find_map(|(kind, pattern)| pattern.find(token).map(|m| (kind, m.as_str())))
}

/// Classify the trailing tokens of a line.
///
/// When two tokens fall in the same category the first one wins; the
/// category left without a token then fails the line.
///
/// # Errors
///
/// Returns `ParseError::MissingField` for the first category (in priority
/// order) with no token.
pub fn classify(tokens: &[String]) -> ParseResult<ClassifiedFields> {
    let mut phone = None;
    let mut zip = None;
    let mut color = None;

    for token in tokens {
        let (slot, text) = match classify_token(token) {
            Some((FieldKind::Phone, text)) => (&mut phone, text),
            Some((FieldKind::Zip, text)) => (&mut zip, text),
            Some((FieldKind::Color, text)) => (&mut color, text),
            None => {
                tracing::trace!(token = %token, "Token matches no field pattern");
                continue;
            }
        };

        if slot.is_none() {
            *slot = Some(text);
        }
    }

    let phone = phone.ok_or(ParseError::MissingField(FieldKind::Phone))?;
    let zip = zip.ok_or(ParseError::MissingField(FieldKind::Zip))?;
    let color = color.ok_or(ParseError::MissingField(FieldKind::Color))?;

    Ok(ClassifiedFields {
        phone: PhoneNumber::from_matched(phone),
        zip_code: ZipCode::from_matched(zip),
        color: Color::from_matched(color),
    })
}
