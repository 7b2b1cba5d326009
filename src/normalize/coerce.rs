//! Type coercion of raw cell values.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{RawValue, Value};

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("valid regex"));

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid regex")
});

/// Classify a trimmed string as a number or boolean.
///
/// Returns `None` when the string is neither, in which case callers keep the original value.
pub fn coerce_str(s: &str) -> Option<Value> {
    if INTEGER.is_match(s) {
        // Out of i64 range: still a number, just not an exact one.
        return Some(match s.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::number(s.parse::<f64>().ok()?),
        });
    }
    if DECIMAL.is_match(s) {
        return s.parse::<f64>().ok().map(Value::number);
    }
    match s {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        _ => None,
    }
}

/// Coerce a raw cell into a typed [`Value`].
///
/// Strings are trimmed and then classified with [`coerce_str`]; values a reader already typed
/// (spreadsheet numbers and booleans) keep their type. Empty cells become `""`.
pub fn coerce(raw: RawValue) -> Value {
    match raw {
        RawValue::Empty => Value::Str(String::new()),
        RawValue::Int(n) => Value::Int(n),
        RawValue::Float(n) => Value::number(n),
        RawValue::Bool(b) => Value::Bool(b),
        RawValue::Str(s) => {
            let trimmed = s.trim();
            match coerce_str(trimmed) {
                Some(v) => v,
                None if trimmed.len() == s.len() => Value::Str(s),
                None => Value::Str(trimmed.to_owned()),
            }
        }
    }
}
