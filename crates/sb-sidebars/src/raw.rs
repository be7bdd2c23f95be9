//! Raw configuration literal.
//!
//! [`RawRegistry`] is the unvalidated top-level mapping from sidebar name to
//! its item list. It keeps entries as an ordered list of pairs instead of a
//! map so that declaration order is preserved and repeated sidebar names are
//! still visible to the validator.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::SchemaError;
use crate::path::NodePath;

/// Unvalidated sidebar configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRegistry {
    entries: Vec<(String, Value)>,
}

impl RawRegistry {
    /// Create an empty literal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sidebar. Repeated names are kept.
    pub fn push(&mut self, name: impl Into<String>, items: Value) {
        self.entries.push((name.into(), items));
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Build from an already parsed JSON value.
    ///
    /// JSON objects cannot carry repeated keys, so duplicate detection only
    /// applies to literals parsed through [`Deserialize`].
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidVariant` if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(SchemaError::invalid(
                &NodePath::root(),
                format!(
                    "expected a mapping of sidebar names, found {}",
                    value_kind(&other)
                ),
            )),
        }
    }
}

impl FromIterator<(String, Value)> for RawRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for RawRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawRegistry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of sidebar names to item lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, items)) = map.next_entry::<String, Value>()? {
                    entries.push((name, items));
                }
                Ok(RawRegistry { entries })
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

impl Serialize for RawRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, items) in &self.entries {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

/// Short description of a JSON value's kind for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
