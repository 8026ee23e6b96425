//! Recursive-descent checker over a record's schema and live values
//!
//! For every declared field the checker runs, in order: the absence check,
//! the representation check, the range/enum check, and finally recursion into
//! nested records and container elements. The walk follows values, not the
//! schema graph, so self-referential struct types cost only as much as the
//! depth of the actual instance. The first violation aborts the walk.
//!
//! Copyright (c) 2025 Recordcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use recordcheck_core::{ElementType, Record, TypeArgs, TypeTag, Value};

use crate::validation::base::{SchemaValidator, ValidationContext};
use crate::validation::error::{ValidationError, ValidationResult};

/// Validator for populated records
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaValidator for RecordValidator {
    type Input = dyn Record;

    fn validate_with_context(
        &self,
        input: &Self::Input,
        context: &ValidationContext,
    ) -> ValidationResult<()> {
        let result = check_record(input, context);
        if let Err(error) = &result {
            tracing::debug!(
                record = input.schema().name(),
                path = %error.path,
                kind = %error.kind,
                "record failed validation"
            );
        }
        result
    }
}

/// Walk every declared field of `record`
pub fn check_record(record: &dyn Record, context: &ValidationContext) -> ValidationResult<()> {
    let schema = record.schema();
    for descriptor in schema.fields() {
        let field_context = context.child(&descriptor.name);
        tracing::trace!(
            record = schema.name(),
            path = %field_context.path,
            tag = %descriptor.tag,
            "checking field"
        );
        check_value(
            descriptor.tag,
            descriptor.args.as_ref(),
            descriptor.required,
            record.get(descriptor.id),
            &field_context,
        )?;
    }
    Ok(())
}

/// Check one value against its declared tag and type arguments.
///
/// `value` is `None` when the slot is absent. Container elements, map keys and
/// map values are always checked with `required` forced on.
pub fn check_value(
    tag: TypeTag,
    args: Option<&TypeArgs>,
    required: bool,
    value: Option<&Value>,
    context: &ValidationContext,
) -> ValidationResult<()> {
    let value = match value {
        Some(value) => value,
        None if required => {
            return Err(ValidationError::required_field_missing(&context.path, tag));
        }
        None => return Ok(()),
    };

    check_representation(tag, args, value, context)?;
    check_range(tag, args, value, context)?;

    match (value, args) {
        (Value::Struct(record), _) => check_record(record.as_ref(), context),
        (Value::List(items) | Value::Set(items), Some(TypeArgs::Elements(element))) => {
            check_elements(element, items, context)
        }
        (Value::Map(entries), Some(TypeArgs::Map { key, value: mapped })) => {
            let element_context = context.element();
            for (k, v) in entries {
                check_element(key, k, &element_context)?;
                check_element(mapped, v, &element_context)?;
            }
            Ok(())
        }
        (Value::List(_) | Value::Set(_) | Value::Map(_), _) => {
            tracing::warn!(path = %context.path, %tag, "container field has no element type, elements not checked");
            Ok(())
        }
        _ => Ok(()),
    }
}

fn check_elements(element: &ElementType, items: &[Value], context: &ValidationContext) -> ValidationResult<()> {
    let element_context = context.element();
    items
        .iter()
        .try_for_each(|item| check_element(element, item, &element_context))
}

fn check_element(element: &ElementType, value: &Value, context: &ValidationContext) -> ValidationResult<()> {
    check_value(element.tag, element.args.as_ref(), true, Some(value), context)
}

fn check_representation(
    tag: TypeTag,
    args: Option<&TypeArgs>,
    value: &Value,
    context: &ValidationContext,
) -> ValidationResult<()> {
    let matches = match (tag, value) {
        (TypeTag::Stop | TypeTag::Void, _) => true,
        (TypeTag::Bool, Value::Bool(_)) => true,
        (TypeTag::Byte | TypeTag::I16 | TypeTag::I32 | TypeTag::I64, Value::Int(_)) => true,
        (TypeTag::Double, Value::Double(_)) => true,
        (TypeTag::String, Value::String(_)) => true,
        (TypeTag::Binary, Value::Binary(_)) => true,
        (TypeTag::Struct, Value::Struct(record)) => match args {
            // schemas are process-wide singletons, one per record type
            Some(TypeArgs::Struct(expected)) => std::ptr::eq(record.schema(), expected.get()),
            _ => true,
        },
        (TypeTag::Map, Value::Map(_)) => true,
        (TypeTag::Set, Value::Set(_)) => true,
        (TypeTag::List, Value::List(_)) => true,
        _ => false,
    };
    if matches {
        return Ok(());
    }

    let expected = match (tag, args) {
        (TypeTag::Struct, Some(TypeArgs::Struct(expected))) => expected.get().name(),
        _ => tag.representation().unwrap_or("nothing"),
    };
    Err(ValidationError::type_mismatch(
        &context.path,
        tag,
        expected,
        value.representation(),
    ))
}

fn check_range(
    tag: TypeTag,
    args: Option<&TypeArgs>,
    value: &Value,
    context: &ValidationContext,
) -> ValidationResult<()> {
    let Value::Int(n) = *value else {
        return Ok(());
    };

    if let Some((min, max)) = tag.integer_range() {
        if n < min || n > max {
            return Err(ValidationError::value_out_of_range(
                &context.path,
                tag,
                "range",
                format!("[{}, {}]", min, max),
                n.to_string(),
            ));
        }
    }

    if let (TypeTag::I32, Some(TypeArgs::Enum(def))) = (tag, args) {
        if !def.contains(n) {
            let members: Vec<String> = def.values.iter().map(|(v, _)| v.to_string()).collect();
            return Err(ValidationError::value_out_of_range(
                &context.path,
                tag,
                "enum",
                format!("{} value in {{{}}}", def.name, members.join(", ")),
                n.to_string(),
            ));
        }
    }

    Ok(())
}
