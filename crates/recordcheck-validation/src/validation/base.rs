//! Base validation trait and path tracking
//!
//! Copyright (c) 2025 Recordcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::validation::error::{ValidationErrors, ValidationResult};

/// Position of the value under validation within the record graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// Qualified path of the current value; empty at the root record
    pub path: String,
}

impl ValidationContext {
    /// Context of a top-level record
    pub fn root() -> Self {
        Self::default()
    }

    /// Context of a named field of the current record
    pub fn child<P: AsRef<str>>(&self, name: P) -> Self {
        let path = if self.path.is_empty() {
            name.as_ref().to_string()
        } else {
            format!("{}.{}", self.path, name.as_ref())
        };
        Self { path }
    }

    /// Context of a container element, map key or map value
    pub fn element(&self) -> Self {
        Self {
            path: format!("{}[elem]", self.path),
        }
    }

    /// Context of the `index`-th record of a batch
    pub fn index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Base trait for schema validators
pub trait SchemaValidator {
    /// The type being validated
    type Input: ?Sized;

    /// Validate from the root, stopping at the first violation
    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        self.validate_with_context(input, &ValidationContext::root())
    }

    /// Validate with paths qualified by `context`
    fn validate_with_context(
        &self,
        input: &Self::Input,
        context: &ValidationContext,
    ) -> ValidationResult<()>;

    /// Collect the outcome as an error list (empty on success)
    fn collect_errors(&self, input: &Self::Input) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if let Err(error) = self.validate(input) {
            errors.add(error);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let root = ValidationContext::root();
        assert!(root.is_root());

        let field = root.child("ab");
        assert_eq!(field.path, "ab");
        assert_eq!(field.child("s").path, "ab.s");
        assert_eq!(field.element().path, "ab[elem]");
        assert_eq!(field.element().element().child("x").path, "ab[elem][elem].x");
    }

    #[test]
    fn test_batch_index_prefix() {
        let record = ValidationContext::root().index(3);
        assert_eq!(record.path, "[3]");
        assert_eq!(record.child("s").path, "[3].s");
    }
}
