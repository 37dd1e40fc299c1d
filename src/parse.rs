use crate::{vector::Vector, Result, VectorError};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Textual marker for the null vector, matched case-insensitively.
pub const NULL_MARKER: &str = "NULL";

/// Parses the textual form of a vector.
///
/// `None`, blank input and the `NULL` marker all produce [`Vector::Null`].
/// Otherwise the input may be wrapped in `[` `]` or given bare, elements are
/// separated by `,` and empty elements are skipped, so `"[1,,2]"` has two
/// elements and `"[]"` has none. A single malformed element fails the whole
/// parse.
pub fn parse_vector(input: Option<&str>) -> Result<Vector> {
    let Some(text) = input else {
        return Ok(Vector::Null);
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_MARKER) {
        return Ok(Vector::Null);
    }

    let body = trimmed
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(trimmed);

    let mut data = Vec::new();
    for (position, raw) in body.split(',').enumerate() {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        data.push(parse_element(token, position)?);
    }

    trace!(dimension = data.len(), "parsed vector");
    Ok(Vector::Values(data))
}

fn parse_element(token: &str, position: usize) -> Result<f32> {
    if let Some(special) = parse_special(token) {
        return Ok(special);
    }

    if !is_decimal(token) {
        debug!(token, position, "rejected vector element");
        return Err(VectorError::FormatError(format!(
            "invalid element '{}' at position {}",
            token, position
        )));
    }

    token.parse::<f32>().map_err(|e| {
        VectorError::FormatError(format!(
            "invalid element '{}' at position {}: {}",
            token, position, e
        ))
    })
}

/// Words produced by the formatter for non-finite elements.
fn parse_special(token: &str) -> Option<f32> {
    let unsigned = token.trim_start_matches(['+', '-']);
    let negative = token.starts_with('-');
    // Only a single sign is allowed, and NaN is unsigned.
    if token.len() - unsigned.len() > 1 {
        return None;
    }

    if unsigned.eq_ignore_ascii_case("infinity") {
        Some(if negative { f32::NEG_INFINITY } else { f32::INFINITY })
    } else if token.eq_ignore_ascii_case("nan") {
        Some(f32::NAN)
    } else {
        None
    }
}

/// Decimal element, optionally signed, with optional fraction and exponent.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?$").expect("Invalid regex")
});

fn is_decimal(token: &str) -> bool {
    DECIMAL.is_match(token)
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_vector(Some(s))
    }
}
