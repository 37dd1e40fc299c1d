use crate::{parse::NULL_MARKER, vector::Vector};
use std::fmt;

/// Digits rendered after the decimal point of every element.
pub const MANTISSA_DIGITS: usize = 7;

/// Renders one element as `d.ddddddde±XXX`.
///
/// The decimal expansion comes from the exact binary value, with ties
/// rounded half-to-even. Non-finite values use the words the parser
/// accepts back: `NaN`, `Infinity`, `-Infinity`.
pub fn format_element(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let word = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return word.to_string();
    }

    let raw = format!("{:.*e}", MANTISSA_DIGITS, value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>3}", mantissa, sign, digits)
}

/// Renders a non-null element sequence as `[e1,e2,...]`.
pub fn format_values(values: &[f32]) -> String {
    let elements: Vec<String> = values.iter().map(|v| format_element(*v)).collect();
    format!("[{}]", elements.join(","))
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vector::Null => f.write_str(NULL_MARKER),
            Vector::Values(data) => f.write_str(&format_values(data)),
        }
    }
}
