//! Validation error types
//!
//! A single [`ValidationError`] describes the first violation found in a
//! record. [`ValidationErrors`] only appears in batch validation, where each
//! failing record contributes its own first violation.
//!
//! Copyright (c) 2025 Recordcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use recordcheck_core::TypeTag;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of schema contract a value broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A required field, or a container element, key or value, is absent
    RequiredFieldMissing,
    /// The value's runtime representation does not match the declared tag
    TypeMismatch,
    /// A BYTE/I16 outside its range, or an enum-bound I32 outside its value set
    ValueOutOfRange,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::RequiredFieldMissing => write!(f, "required field missing"),
            ValidationErrorKind::TypeMismatch => write!(f, "type mismatch"),
            ValidationErrorKind::ValueOutOfRange => write!(f, "value out of range"),
        }
    }
}

/// Expected vs actual detail of a violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The validation rule that was violated
    pub rule: String,
    /// What was expected
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule '{}' violated: expected {}, but found {}",
            self.rule, self.expected, self.actual
        )
    }
}

/// First schema violation found in a record, with the qualified field path
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// Dotted/bracketed path of the failing field, e.g. `ab.s` or `byte_list[elem]`
    pub path: String,
    /// Declared tag of the failing slot
    pub tag: TypeTag,
    /// Human-readable error message
    pub message: String,
    pub violation: Option<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(violation) = &self.violation {
            write!(f, " ({})", violation)?;
        }
        Ok(())
    }
}

impl ValidationError {
    pub fn required_field_missing<P: Into<String>>(path: P, tag: TypeTag) -> Self {
        let path = path.into();
        Self {
            kind: ValidationErrorKind::RequiredFieldMissing,
            message: format!(
                "Field {} is/contains None. None value is invalid for required fields or inside containers.",
                path
            ),
            path,
            tag,
            violation: None,
        }
    }

    pub fn type_mismatch<P, E, A>(path: P, tag: TypeTag, expected: E, actual: A) -> Self
    where
        P: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        let path = path.into();
        let expected = expected.into();
        let actual = actual.into();
        Self {
            kind: ValidationErrorKind::TypeMismatch,
            message: format!(
                "Field {} should be/contain {}, but instead it is/contains {}.",
                path, expected, actual
            ),
            path,
            tag,
            violation: Some(Self::create_violation("representation", expected, actual)),
        }
    }

    pub fn value_out_of_range<P, R, E, A>(path: P, tag: TypeTag, rule: R, expected: E, actual: A) -> Self
    where
        P: Into<String>,
        R: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        let path = path.into();
        Self {
            kind: ValidationErrorKind::ValueOutOfRange,
            message: format!(
                "Field {} should be/contain {}, but the value is out of range.",
                path, tag
            ),
            path,
            tag,
            violation: Some(Self::create_violation(rule, expected, actual)),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Create a violation for a specific rule
    pub fn create_violation<R, E, A>(rule: R, expected: E, actual: A) -> Violation
    where
        R: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Violation {
            rule: rule.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One error per failing record of a batch
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} record(s) failed validation:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Ok if no errors were collected
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
