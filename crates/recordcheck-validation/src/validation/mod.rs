//! Validation module for populated records
//!
//! Every validation call walks a record's schema and live values and stops at
//! the first violation. Batch validation runs that walk once per record and
//! collects one error per failing record.
//!
//! Copyright (c) 2025 Recordcheck Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod base;
pub mod engine;
pub mod error;

use recordcheck_core::Record;
use serde::{Deserialize, Serialize};

pub use base::{SchemaValidator, ValidationContext};
pub use engine::{check_record, check_value, RecordValidator};
pub use error::{ValidationError, ValidationErrorKind, ValidationErrors, ValidationResult, Violation};

/// Validate a record against its own schema
///
/// # Examples
///
/// ```rust
/// use std::sync::OnceLock;
/// use recordcheck_core::{record_type, FieldDescriptor, Schema, TypeTag};
/// use recordcheck_validation::{validate, ValidationErrorKind};
///
/// fn struct_a_schema() -> &'static Schema {
///     static SCHEMA: OnceLock<Schema> = OnceLock::new();
///     SCHEMA.get_or_init(|| {
///         Schema::builder("StructA")
///             .field(FieldDescriptor::required(1, TypeTag::String, "s"))
///             .build()
///             .unwrap()
///     })
/// }
///
/// record_type! {
///     pub struct StructA {
///         1 => s,
///     }
///     schema = struct_a_schema;
/// }
///
/// let mut a = StructA::new();
/// let err = validate(&a).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::RequiredFieldMissing);
/// assert_eq!(err.path, "s");
///
/// a.s = Some("str".into());
/// assert!(validate(&a).is_ok());
/// ```
pub fn validate(record: &dyn Record) -> ValidationResult<()> {
    RecordValidator::new().validate(record)
}

/// Method-call form of [`validate`] for every record type
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

impl<R: Record> Validate for R {
    fn validate(&self) -> ValidationResult<()> {
        validate(self)
    }
}

impl Validate for dyn Record {
    fn validate(&self) -> ValidationResult<()> {
        validate(self)
    }
}

/// Validation configuration for batch operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Stop at the first failing record instead of checking the rest
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Validate several records independently.
///
/// Each record still stops at its own first violation; error paths are
/// prefixed with the record's position, e.g. `[1].ab.s`.
pub fn validate_batch(records: &[&dyn Record], config: &ValidationConfig) -> Result<(), ValidationErrors> {
    let validator = RecordValidator::new();
    let mut errors = ValidationErrors::new();
    let context = ValidationContext::root();

    for (i, record) in records.iter().enumerate() {
        let record_context = context.index(i);
        match validator.validate_with_context(*record, &record_context) {
            Ok(_) => continue,
            Err(error) => {
                errors.add(error);

                if config.fail_fast {
                    break;
                }

                if config.max_errors > 0 && errors.len() >= config.max_errors {
                    break;
                }
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        failed = errors.len(),
        "batch validation finished"
    );
    errors.into_result()
}
