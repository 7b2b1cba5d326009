//! Core data model types for conversion.
//!
//! Readers produce [`RawValue`]s (the spreadsheet reader groups them into a [`RawTable`]); the
//! normalization stage turns each raw row into a [`NormalizedRow`] of typed [`Value`]s.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A cell as it comes out of a reader, before any normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Missing or blank cell. Normalizes to the empty string.
    Empty,
    /// Text cell (or any CSV field).
    Str(String),
    /// Integer cell.
    Int(i64),
    /// Floating point cell (spreadsheet numbers and date serials).
    Float(f64),
    /// Boolean cell.
    Bool(bool),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Str(s.to_owned())
    }
}

/// Header labels plus the data rows of one sheet.
///
/// Every row has exactly `headers.len()` cells; one row together with the headers is a raw row
/// (original column label -> raw value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Original column labels, in column order.
    pub headers: Vec<String>,
    /// Row-major cell storage, aligned with `headers`.
    pub rows: Vec<Vec<RawValue>>,
}

impl RawTable {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawValue>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A single typed, normalized value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integral number.
    Int(i64),
    /// Non-integral (or out of `i64` range) number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Trimmed string.
    Str(String),
    /// Value of an array key.
    List(Vec<Value>),
}

/// Floats below this magnitude are exactly representable as integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Value {
    /// Build a numeric value, storing whole numbers as [`Value::Int`].
    ///
    /// JSON numbers carry no int/float distinction, so `3.0` is emitted as `3`.
    pub fn number(n: f64) -> Self {
        if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
            Value::Int(n as i64)
        } else {
            Value::Float(n)
        }
    }

    /// Returns the string slice if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

/// One output record: canonical key -> typed value, in source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRow {
    entries: Vec<(String, Value)>,
}

impl NormalizedRow {
    /// Create an empty row with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value. A repeated key keeps its original position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by canonical key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for NormalizedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{NormalizedRow, Value};

    #[test]
    fn number_stores_whole_floats_as_int() {
        assert_eq!(Value::number(30.0), Value::Int(30));
        assert_eq!(Value::number(-2.0), Value::Int(-2));
        assert_eq!(Value::number(2.75), Value::Float(2.75));
        assert_eq!(Value::number(1e300), Value::Float(1e300));
    }

    #[test]
    fn repeated_key_overwrites_in_place() {
        let mut row = NormalizedRow::default();
        assert!(row.is_empty());
        row.insert("name", Value::from("a"));
        row.insert("age", Value::Int(1));
        row.insert("name", Value::from("b"));

        assert_eq!(row.len(), 2);
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(row.get("name"), Some(&Value::from("b")));
        assert_eq!(
            row.iter().collect::<Vec<_>>(),
            vec![("name", &Value::from("b")), ("age", &Value::Int(1))]
        );
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut row = NormalizedRow::default();
        row.insert("zeta", Value::Bool(true));
        row.insert("alpha", Value::List(vec![Value::Int(1), Value::Float(2.5)]));

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"zeta":true,"alpha":[1,2.5]}"#);
    }
}
