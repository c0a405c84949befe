//! Record instances.

use mutrec_core::{RecordError, RecordResult, Value};
use std::fmt;

use crate::{RecordType, RenderConfig};

/// An instance of a record type.
///
/// The set of fields is fixed by the record type; values can be reassigned
/// freely. `Display` and `Debug` render the same string, for example
/// `F(foo=1, bar=2, baz=9)`.
#[derive(Clone, PartialEq)]
pub struct Record {
    record_type: RecordType,
    /// One value per distinct field name.
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn from_slots(record_type: RecordType, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), record_type.slot_count());
        Self {
            record_type,
            values,
        }
    }

    /// Get the record's type.
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Get the type name.
    pub fn type_name(&self) -> &str {
        self.record_type.name()
    }

    /// Get a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record_type
            .slot_of(field)
            .map(|slot| &self.values[slot])
    }

    /// Get a field value by declaration position.
    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.record_type
            .field_slots()
            .get(index)
            .map(|&slot| &self.values[slot])
    }

    /// Get a mutable reference to a field value by name.
    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        let slot = self.record_type.slot_of(field)?;
        Some(&mut self.values[slot])
    }

    /// Assign a field, returning the previous value.
    ///
    /// No check is made on the new value; only the field name must be declared.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> RecordResult<Value> {
        let Some(slot) = self.record_type.slot_of(field) else {
            return Err(RecordError::unknown_field(self.record_type.name(), field));
        };
        Ok(std::mem::replace(&mut self.values[slot], value.into()))
    }

    /// Reset a field to unset, returning the previous value.
    pub fn clear(&mut self, field: &str) -> RecordResult<Value> {
        self.set(field, Value::Unset)
    }

    /// Iterate over `(field name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.record_type
            .field_names()
            .iter()
            .zip(self.record_type.field_slots())
            .map(move |(name, &slot)| (name.as_str(), &self.values[slot]))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.record_type.field_count()
    }

    /// Returns true if the type declares no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render with a non-default configuration.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        config.render(
            self.type_name(),
            self.fields().map(|(name, value)| (name, value.to_string())),
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderConfig::default()))
    }
}

// Debug intentionally matches Display.
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
