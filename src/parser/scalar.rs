//! Auto-typing of untyped scalar text.
//!
//! Both legacy formats store every value as text. The two parsers use
//! different, fixed rules to decide whether a piece of text is a string, an
//! integer or a double; the rules are kept exactly because files in the wild
//! depend on them (`"1920x1080"` is an integer in the line format, a string
//! in the markup format).

use crate::base::Value;
use crate::base::text::{collapse_escaped_slashes, leading_f64, leading_i64};

/// Classify the text after `key :` in the line-oriented format.
///
/// - starts with a letter, `\` or `/`: string
/// - starts with `"`: the quoted span as a string
/// - contains `.`: double, read as a numeric prefix
/// - anything else: integer, read as a numeric prefix (empty is `0`)
pub fn line_value(raw: &str) -> Value {
    let raw = raw.trim_start_matches(' ');

    match raw.chars().next() {
        Some(c) if c.is_alphabetic() || c == '\\' || c == '/' => {
            Value::String(collapse_escaped_slashes(raw))
        }
        Some('"') => {
            let inner = &raw[1..];
            let inner = inner.strip_suffix('"').unwrap_or(inner);
            Value::String(collapse_escaped_slashes(inner))
        }
        _ if raw.contains('.') => Value::Double(leading_f64(raw)),
        _ => Value::Integer(leading_i64(raw)),
    }
}

/// Classify an attribute value in the markup format.
///
/// All digits is an integer, digits with exactly one `.` is a double, and
/// everything else (including the empty string) stays a string.
pub fn attribute_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }

    let mut dots = 0;
    let mut digits = 0;
    for b in raw.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return Value::String(raw.to_string()),
        }
    }

    match (dots, digits) {
        (0, _) => raw
            .parse()
            .map_or_else(|_| Value::String(raw.to_string()), Value::Integer),
        (1, 1..) => Value::Double(leading_f64(raw)),
        _ => Value::String(raw.to_string()),
    }
}
