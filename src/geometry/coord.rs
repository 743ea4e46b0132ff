// src/geometry/coord.rs
// Coordinate-level helpers shared by Point and Vector: the text grammar for
// a single coordinate, JSON value coercion, and JSON number formatting.

use serde_json::{Number, Value};

/// Parse one coordinate from text.
///
/// The accepted grammar is an optionally signed decimal with an optional
/// integer part and a mandatory trailing digit run: `1`, `-2.5`, `.5`,
/// `+0.25`. Exponent notation, a dangling dot (`1.`) and stray characters
/// are rejected.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match unsigned.split_once('.') {
        Some((integer, fraction)) => {
            (integer.is_empty() || all_digits(integer)) && all_digits(fraction)
        }
        None => all_digits(unsigned),
    };

    if well_formed {
        text.parse().ok()
    } else {
        None
    }
}

/// Coerce a JSON value into a coordinate.
///
/// Numbers pass through; strings are trimmed and read as decimals, so
/// `"2.5"` is as good as `2.5`. Anything else is not a coordinate.
pub fn coordinate_from_json(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Render a coordinate as a JSON number.
///
/// Integral values become JSON integers (`1`, not `1.0`) so that containers
/// built from whole-number coordinates keep the documented compact encoding.
/// Non-finite values have no JSON representation and collapse to `0`.
pub fn json_number(value: f64) -> Number {
    if value.is_finite() && value.fract() == 0.0 && (value.abs() as u64) < (1u64 << 53) {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}
