//! Row normalization: canonical keys, typed values and array fields.
//!
//! Both readers funnel through here:
//!
//! - [`NormalizeOptions::canonical_headers`] turns the header labels into canonical keys once per
//!   input, applying the [`EmptyKeyPolicy`]
//! - [`NormalizeOptions::normalize_row`] trims, coerces and (for keys in the [`ArrayKeySet`])
//!   splits every cell of one row
//!
//! ```
//! use tabular_json::normalize::{ArrayKeySet, NormalizeOptions};
//! use tabular_json::types::{RawValue, Value};
//!
//! let opts = NormalizeOptions {
//!     array_keys: ArrayKeySet::parse("tags"),
//!     ..Default::default()
//! };
//! let keys = opts.canonical_headers(["Full Name", "Tags"]).unwrap();
//! let row = opts.normalize_row(&keys, vec![RawValue::from(" Jane "), RawValue::from("a, b ,c")]);
//!
//! assert_eq!(row.get("fullName"), Some(&Value::from("Jane")));
//! assert_eq!(
//!     row.get("tags"),
//!     Some(&Value::List(vec![Value::from("a"), Value::from("b"), Value::from("c")]))
//! );
//! ```

pub mod coerce;
pub mod key;

use std::collections::BTreeSet;

use tracing::warn;

use crate::error::{ConvertError, ConvertResult};
use crate::types::{NormalizedRow, RawValue, Value};

pub use coerce::{coerce, coerce_str};
pub use key::to_camel_case;

/// Canonical keys whose values are always emitted as lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayKeySet(BTreeSet<String>);

impl ArrayKeySet {
    /// Parse a comma-separated key list. Pieces are trimmed; empty pieces are ignored.
    pub fn parse(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ArrayKeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// What to do when a column label normalizes to the empty string (e.g. `"#"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyKeyPolicy {
    /// Keep the empty key and log a warning. Several such columns collapse into one key.
    #[default]
    Allow,
    /// Fail the read with [`ConvertError::EmptyKey`].
    Reject,
}

/// Options controlling row normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Keys whose values are split into lists.
    pub array_keys: ArrayKeySet,
    /// Handling of labels that normalize to an empty key.
    pub empty_keys: EmptyKeyPolicy,
}

impl NormalizeOptions {
    /// Convert header labels into canonical keys (in column order).
    ///
    /// Collisions are allowed; later columns overwrite earlier ones in each row.
    pub fn canonical_headers<'a, I>(&self, labels: I) -> ConvertResult<Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut keys: Vec<String> = Vec::new();
        for (idx0, label) in labels.into_iter().enumerate() {
            let column = idx0 + 1;
            let key = to_camel_case(label);
            if key.is_empty() {
                match self.empty_keys {
                    EmptyKeyPolicy::Reject => {
                        return Err(ConvertError::EmptyKey {
                            column,
                            label: label.to_owned(),
                        });
                    }
                    EmptyKeyPolicy::Allow => {
                        warn!(column, label, "column label normalizes to an empty key");
                    }
                }
            }
            if keys.contains(&key) {
                warn!(column, label, key = %key, "duplicate canonical key; later column wins");
            }
            keys.push(key);
        }
        Ok(keys)
    }

    /// Normalize one cell stored under `key`.
    pub fn normalize_value(&self, key: &str, raw: RawValue) -> Value {
        let value = coerce(raw);
        if !self.array_keys.contains(key) {
            return value;
        }
        match value {
            Value::Str(s) => Value::List(
                s.split(',')
                    .map(|piece| Value::Str(piece.trim().to_owned()))
                    .collect(),
            ),
            other => Value::List(vec![other]),
        }
    }

    /// Normalize one row whose cells are aligned with `keys`.
    ///
    /// Cells beyond the number of keys are ignored.
    pub fn normalize_row<I>(&self, keys: &[String], cells: I) -> NormalizedRow
    where
        I: IntoIterator<Item = RawValue>,
    {
        let mut row = NormalizedRow::with_capacity(keys.len());
        for (key, raw) in keys.iter().zip(cells) {
            row.insert(key.as_str(), self.normalize_value(key, raw));
        }
        row
    }
}
