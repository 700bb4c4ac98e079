//! Token standardization.
//!
//! Strips noise characters from a raw line, splits it on commas, and splits a
//! fused `FirstLast` name token when the line came up short.

use crate::error::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Fields in a canonical line: first, last, phone, zip, color.
pub const EXPECTED_FIELDS: usize = 5;

/// Characters removed from every line before tokenizing.
const NOISE_CHARS: &[char] = &['(', ')', '-', '\n', '\r', ' '];

const FIELD_SEPARATOR: char = ',';

/// An uppercase letter starting a run of lowercase letters.
static NAME_PIECE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Lu}\p{Ll}+").expect("Failed to compile name piece regex"));

/// Standardize one raw line into exactly `expected` tokens.
///
/// # Errors
///
/// Returns `ParseError::MalformedEntry` if the token count differs from
/// `expected` after the fused-name split.
pub fn standardize(raw: &str, expected: usize) -> ParseResult<Vec<String>> {
    let cleaned: String = raw.chars().filter(|c| !NOISE_CHARS.contains(c)).collect();
    let mut tokens: Vec<String> = cleaned.split(FIELD_SEPARATOR).map(String::from).collect();

    if tokens.len() < expected {
        if let Some((first, last)) = split_fused_name(&tokens[0]) {
            tracing::trace!(first = %first, last = %last, "Split fused name token");
            tokens[0] = last;
            tokens.insert(0, first);
        }
    }

    if tokens.len() != expected {
        return Err(ParseError::MalformedEntry {
            expected,
            found: tokens.len(),
        });
    }

    Ok(tokens)
}

/// Split a fused `FirstLast` token at camel-case boundaries.
///
/// With three or more pieces the first piece is the first name and pieces two
/// and three form the last name (`TomMcGreggor` -> `Tom`, `McGreggor`).
/// Returns `None` when fewer than two pieces are found.
pub fn split_fused_name(token: &str) -> Option<(String, String)> {
    let pieces = name_pieces(token);

    match pieces.as_slice() {
        [first, second, third, ..] => Some((first.to_string(), format!("{}{}", second, third))),
        [first, last] => Some((first.to_string(), last.to_string())),
        _ => None,
    }
}

/// Break a token into camel-case runs plus the non-empty text between them.
fn name_pieces(token: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut cursor = 0;

    for found in NAME_PIECE_REGEX.find_iter(token) {
        if found.start() > cursor {
            pieces.push(&token[cursor..found.start()]);
        }
        pieces.push(found.as_str());
        cursor = found.end();
    }

    if cursor < token.len() {
        pieces.push(&token[cursor..]);
    }

    pieces
}
