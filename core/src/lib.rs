//! mutrec core types
//!
//! This crate provides the foundational types shared by the record crates:
//! - Identity of record types (RecordTypeId)
//! - Field values (the Value enum and its unset sentinel)
//! - Common error types

mod error;
mod id;
mod value;

pub use error::*;
pub use id::*;
pub use value::*;
