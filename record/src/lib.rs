//! mutrec record types
//!
//! Mutable records with a fixed, ordered set of named fields:
//! - `define_record_type` creates a new record type from a name and field list
//! - `RecordType::construct` builds instances from positional and keyword `Args`
//! - `Record` fields can be read and reassigned by name
//! - records render as `Name(field=value, ...)` with long values truncated
//!
//! ```
//! use mutrec_record::{args, define_record_type};
//!
//! let f = define_record_type("F", ["foo", "bar", "baz"]);
//! let mut t = f.construct(args![1; bar = 2, baz = 3]).unwrap();
//! t.set("baz", 9).unwrap();
//! assert_eq!(t.to_string(), "F(foo=1, bar=2, baz=9)");
//! ```

mod args;
mod macros;
mod record;
pub mod render;
mod types;

pub use args::Args;
pub use record::Record;
pub use render::RenderConfig;
pub use types::{define_record_type, RecordType};

pub use mutrec_core::{RecordError, RecordResult, RecordTypeId, Value};
