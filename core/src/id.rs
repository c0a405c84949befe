//! Identity types for record types.
//!
//! Every call to the record type factory allocates a fresh identifier, so
//! two types defined with the same name and fields are still distinct.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_RECORD_TYPE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordTypeId(pub u64);

impl RecordTypeId {
    /// Create a RecordTypeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate the next process-unique identifier.
    pub fn next() -> Self {
        Self(NEXT_RECORD_TYPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
