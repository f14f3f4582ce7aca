//! The compensation record the engine consumes and enriches.
//!
//! A record is a flat mapping of recognized field names to text values. The
//! caller owns it before and after an invocation; the engine only reads the
//! input fields and writes the derived and audit-shadow fields.

use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::calculation::{Cents, decimal_to_cents};

use super::Field;

/// The value occupying a record field.
///
/// `Missing` is the explicit absent marker written into audit-shadow fields
/// when no prior computed value existed; it serializes as JSON `null`. A
/// field holding `Missing` still counts as present for the write-once audit
/// rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A textual value.
    Text(String),
    /// An explicit "no prior value" marker.
    Missing,
}

impl FieldValue {
    /// Returns the text of this value, or `None` for `Missing`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Missing => None,
        }
    }
}

/// A sparse compensation record: recognized fields mapped to values.
///
/// Ingestion is tolerant: keys are matched case-insensitively, unknown keys
/// are ignored, and absent fields take their documented defaults when read
/// through the typed accessors.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{CompensationRecord, Field};
///
/// let record = CompensationRecord::new()
///     .with(Field::CashStipend, "1000.00")
///     .with(Field::ReceivesChurchHousing, "y");
///
/// assert_eq!(record.money(Field::CashStipend), 100_000);
/// assert_eq!(record.money(Field::Utilities), 0);
/// assert_eq!(record.flag(Field::ReceivesChurchHousing), "Y");
/// assert_eq!(record.flag(Field::ReceivesMeals), "N");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompensationRecord {
    fields: BTreeMap<Field, FieldValue>,
}

impl CompensationRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`, for constructing records in tests and callers.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field to a textual value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, FieldValue::Text(value.into()));
    }

    /// Sets a field to the explicit absent marker.
    pub fn set_missing(&mut self, field: Field) {
        self.fields.insert(field, FieldValue::Missing);
    }

    /// Returns true if the field is present, including present-as-`Missing`.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Returns the raw value of a field, if present.
    pub fn value(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Returns the text of a field, or `None` when absent or `Missing`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).and_then(FieldValue::as_text)
    }

    /// Reads a monetary field as scaled-integer cents.
    ///
    /// Absent, blank, `Missing`, and malformed values all degrade to 0.
    pub fn money(&self, field: Field) -> Cents {
        self.get(field).map(decimal_to_cents).unwrap_or(0)
    }

    /// Reads a Y/N flag field, trimmed and upper-cased.
    ///
    /// Absent, blank, and `Missing` values default to "N".
    pub fn flag(&self, field: Field) -> String {
        match self.get(field).map(str::trim) {
            Some(text) if !text.is_empty() => text.to_ascii_uppercase(),
            _ => "N".to_string(),
        }
    }

    /// Reads an opaque identifier field, trimmed.
    ///
    /// Absent, blank, and `Missing` values yield `None`.
    pub fn identifier(&self, field: Field) -> Option<&str> {
        self.get(field).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Returns the number of present fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the present fields in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(f, v)| (*f, v))
    }
}

impl Serialize for CompensationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field.name(), &value.as_text())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CompensationRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = CompensationRecord;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a flat map of compensation field names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = CompensationRecord::new();

                while let Some((key, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    // Unknown keys are ignored, not errors
                    let Some(field) = Field::parse(&key) else {
                        continue;
                    };

                    match value {
                        serde_json::Value::Null => record.set_missing(field),
                        serde_json::Value::String(s) => record.set(field, s),
                        serde_json::Value::Number(n) => record.set(field, n.to_string()),
                        serde_json::Value::Bool(b) => record.set(field, b.to_string()),
                        // Structured values cannot occupy a flat field
                        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {}
                    }
                }

                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
