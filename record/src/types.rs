//! Record type definitions.

use mutrec_core::{RecordError, RecordResult, RecordTypeId, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{Args, Record};

/// Define a new record type with the given name and ordered field names.
///
/// Every call produces a distinct type, even when the name and fields match a
/// type defined earlier. Field names are not deduplicated: repeated names
/// share one storage slot.
pub fn define_record_type<I, S>(type_name: impl Into<String>, field_names: I) -> RecordType
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let name = type_name.into();
    let fields: Arc<[String]> = field_names.into_iter().map(Into::into).collect();

    let mut slot_by_name: HashMap<String, usize> = HashMap::with_capacity(fields.len());
    let mut field_slots = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let next = slot_by_name.len();
        let slot = *slot_by_name.entry(field.clone()).or_insert(next);
        field_slots.push(slot);
    }

    let def = RecordTypeDef {
        id: RecordTypeId::next(),
        name,
        fields,
        field_slots,
        slot_by_name,
    };
    tracing::debug!(
        "Defined record type {} ({}) with fields {:?}",
        def.name,
        def.id,
        def.fields
    );

    RecordType {
        def: Arc::new(def),
    }
}

/// Immutable schema shared by a record type and all of its instances.
#[derive(Debug)]
struct RecordTypeDef {
    /// Unique identifier.
    id: RecordTypeId,
    /// Type name, used when rendering.
    name: String,
    /// Field names in declaration order.
    fields: Arc<[String]>,
    /// Storage slot for each declared field, by position.
    field_slots: Vec<usize>,
    /// Storage slot lookup by field name.
    slot_by_name: HashMap<String, usize>,
}

/// A record type: a name plus a fixed, ordered list of field names.
///
/// Cloning is cheap and yields a handle to the same type. Equality compares
/// identity, so two separately defined types are never equal.
#[derive(Clone)]
pub struct RecordType {
    def: Arc<RecordTypeDef>,
}

impl RecordType {
    /// Get the type's unique identifier.
    pub fn id(&self) -> RecordTypeId {
        self.def.id
    }

    /// Get the type name.
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Get the declared field names in order.
    pub fn field_names(&self) -> &[String] {
        &self.def.fields
    }

    /// Get the number of declared fields.
    pub fn field_count(&self) -> usize {
        self.def.fields.len()
    }

    /// Check if the type declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.def.slot_by_name.contains_key(name)
    }

    /// Construct a record from positional and keyword arguments.
    ///
    /// Positional values bind to fields in declaration order. Keywords are
    /// applied afterwards, so a keyword naming a field that was also given
    /// positionally overwrites it. Fields supplied by neither are unset.
    pub fn construct(&self, args: Args) -> RecordResult<Record> {
        let (positional, keywords) = args.into_parts();
        tracing::trace!(
            "Constructing {} with {} positional and {} keyword arguments",
            self.name(),
            positional.len(),
            keywords.len()
        );

        if positional.len() > self.field_count() {
            tracing::debug!(
                "Rejected construction of {}: {} positional arguments for {} fields",
                self.name(),
                positional.len(),
                self.field_count()
            );
            return Err(RecordError::too_many_arguments(
                self.name(),
                self.field_count(),
                positional.len(),
            ));
        }

        let mut values = vec![Value::Unset; self.slot_count()];
        for (index, value) in positional.into_iter().enumerate() {
            values[self.def.field_slots[index]] = value;
        }
        for (field, value) in keywords {
            let slot = self.slot_of(&field).ok_or_else(|| {
                tracing::debug!(
                    "Rejected construction of {}: unknown field {}",
                    self.name(),
                    field
                );
                RecordError::unknown_field(self.name(), field.as_str())
            })?;
            values[slot] = value;
        }

        Ok(Record::from_slots(self.clone(), values))
    }

    /// Construct a record with every field unset.
    pub fn new_record(&self) -> Record {
        Record::from_slots(self.clone(), vec![Value::Unset; self.slot_count()])
    }

    /// Construct a record from positional values only.
    pub fn from_values<I, V>(&self, values: I) -> RecordResult<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.construct(Args::from_positional(values))
    }

    /// Storage slot for a field name.
    pub(crate) fn slot_of(&self, name: &str) -> Option<usize> {
        self.def.slot_by_name.get(name).copied()
    }

    /// Storage slot for each declared field, by position.
    pub(crate) fn field_slots(&self) -> &[usize] {
        &self.def.field_slots
    }

    /// Number of distinct storage slots (distinct field names).
    pub(crate) fn slot_count(&self) -> usize {
        self.def.slot_by_name.len()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.def.id == other.def.id
    }
}

impl Eq for RecordType {}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("id", &self.def.id)
            .field("name", &self.def.name)
            .field("fields", &self.def.fields)
            .finish()
    }
}
