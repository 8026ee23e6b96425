//! Recordcheck Core - schema model and record base for generated records
//!
//! Records generated from an interface-definition file carry a compact field
//! schema: field id, wire type tag, name, nested type arguments, default value
//! and a required flag. This crate holds that model and the record base
//! contract every generated type implements.
//!
//! # Main Components
//!
//! - **Schema Model**: [`TypeTag`], [`TypeArgs`], [`FieldDescriptor`] and the
//!   gap-aware [`Schema`] slot table
//! - **Values**: the runtime [`Value`] stored in record slots
//! - **Record Base**: the [`Record`] trait with structural equality, a printable
//!   representation and delegation to an external [`Codec`]
//!
//! Validation lives in the `recordcheck-validation` crate.
//!
//! # Example
//!
//! ```
//! use std::sync::OnceLock;
//! use recordcheck_core::{record_type, FieldDescriptor, Schema, TypeTag};
//!
//! fn struct_a_schema() -> &'static Schema {
//!     static SCHEMA: OnceLock<Schema> = OnceLock::new();
//!     SCHEMA.get_or_init(|| {
//!         Schema::builder("StructA")
//!             .field(FieldDescriptor::required(1, TypeTag::String, "s"))
//!             .build()
//!             .expect("valid schema")
//!     })
//! }
//!
//! record_type! {
//!     pub struct StructA {
//!         1 => s,
//!     }
//!     schema = struct_a_schema;
//! }
//!
//! let a = StructA { s: Some("str".into()) };
//! assert_eq!(a.to_string(), "StructA(s=\"str\")");
//! ```

pub mod error;
pub mod record;
pub mod schema;
pub mod types;
pub mod value;

pub use error::{CodecOperation, Error, Result};
pub use record::{records_equal, Codec, Record, RecordDisplay};
pub use schema::{FieldDescriptor, FieldId, Schema, SchemaBuilder, SchemaRef};
pub use types::{ElementType, EnumDef, TypeArgs, TypeTag};
pub use value::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
