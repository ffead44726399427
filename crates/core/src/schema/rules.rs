//! Lexical rules shared by the field checks.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex colour regex")
});

/// Longest accepted description, in characters
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// A text field with the empty string treated as absent
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// A numeric field with `null` and the empty string treated as absent
pub fn present_value(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    })
}

/// Reads an integer from a JSON number or a numeric string.
///
/// Floats qualify only when they carry no fractional part.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && float.abs() < i64::MAX as f64)
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
