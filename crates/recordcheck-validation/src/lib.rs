//! Recordcheck Validation - schema-driven structural validation of records
//!
//! This crate walks a populated record's declared schema and its live field
//! values and reports the first value that violates the schema's type, range
//! or required-ness contract, recursing through nested records, lists, sets
//! and maps.
//!
//! ## Rules
//!
//! - A required field must hold a value; an optional field may be absent
//! - List/set elements, map keys and map values may never be absent, whatever
//!   the container field's own required flag says
//! - A value's runtime representation must match its declared wire type
//! - BYTE values lie in [-128, 127] and I16 values in [-32768, 32767]
//! - An I32 bound to an enum must hold one of the enum's values
//! - Nested records must satisfy their own schema
//!
//! ## Errors
//!
//! Every failure is a [`ValidationError`] of one of three kinds
//! ([`ValidationErrorKind`]): `RequiredFieldMissing`, `TypeMismatch` or
//! `ValueOutOfRange`, carrying the qualified path of the failing field
//! (`ab.s`, `byte_list[elem]`). A record that fails validation must not be
//! transmitted or persisted.
//!
//! Validation never mutates the record and is safe to run concurrently on
//! distinct records.
//!
//! Copyright (c) 2025 Recordcheck Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    check_record, check_value, validate, validate_batch, RecordValidator, SchemaValidator,
    Validate, ValidationConfig, ValidationContext, ValidationError, ValidationErrorKind,
    ValidationErrors, ValidationResult, Violation,
};
