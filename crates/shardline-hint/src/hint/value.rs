//! Parsed hint values and their canonical text form.
//!
//! # Example
//!
//! ```
//! use shardline_hint::{Hint, HintType, KeyValue};
//!
//! let hint = Hint::new(HintType::Route)
//!     .with_input(KeyValue::keyed("db", "0"))
//!     .with_input(KeyValue::keyed("tbl", "7"));
//!
//! assert_eq!(hint.to_string(), "ROUTE(db=0,tbl=7)");
//! assert_eq!(hint.get("tbl"), Some("7"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HintType;
use crate::error::HintError;

/// A single hint input: a value with an optional key.
///
/// Inputs without a key are positional, as in `MASTER(foo,bar)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue {
    /// The key, if the input was written as `key=value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The value.
    pub value: String,
}

impl KeyValue {
    /// Creates a positional input.
    #[must_use]
    pub fn positional(value: impl Into<String>) -> Self {
        Self { key: None, value: value.into() }
    }

    /// Creates a keyed input. An empty key yields a positional input.
    #[must_use]
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        Self { key: (!key.is_empty()).then_some(key), value: value.into() }
    }

    /// Returns the key, treating an empty key as absent.
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }

    /// Returns the value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if this input has no key.
    #[inline]
    #[must_use]
    pub fn is_positional(&self) -> bool {
        self.key().is_none()
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = self.key() {
            write!(f, "{key}=")?;
        }
        f.write_str(&self.value)
    }
}

/// A routing hint: a type and its ordered inputs.
///
/// The canonical text form is produced by [`Display`](fmt::Display):
///
/// - without inputs: `TRACE()`
/// - with positional inputs: `MASTER(foo,bar)`
/// - with keyed inputs: `ROUTE(x=foo,y=bar)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    /// The hint type.
    #[serde(rename = "type")]
    pub kind: HintType,
    /// The inputs, in source order.
    #[serde(default)]
    pub inputs: Vec<KeyValue>,
}

impl Hint {
    /// Creates a hint with no inputs.
    #[must_use]
    pub const fn new(kind: HintType) -> Self {
        Self { kind, inputs: Vec::new() }
    }

    /// Creates a hint with the given inputs.
    #[must_use]
    pub fn with_inputs(kind: HintType, inputs: impl IntoIterator<Item = KeyValue>) -> Self {
        Self { kind, inputs: inputs.into_iter().collect() }
    }

    /// Appends an input.
    #[must_use]
    pub fn with_input(mut self, input: KeyValue) -> Self {
        self.inputs.push(input);
        self
    }

    /// Returns true if the hint has no inputs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Returns the value of the first input with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inputs.iter().find(|kv| kv.key() == Some(key)).map(KeyValue::value)
    }

    /// Iterates over the values of positional inputs, in order.
    pub fn positional(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().filter(|kv| kv.is_positional()).map(KeyValue::value)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{input}")?;
        }
        f.write_str(")")
    }
}

impl FromStr for Hint {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
