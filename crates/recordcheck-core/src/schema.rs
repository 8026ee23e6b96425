//! Static, immutable description of a record type's shape
//!
//! A [`Schema`] is an ordered slot table indexed by field id. Field ids are not
//! necessarily contiguous, so slots without a field hold a gap marker (`None`).
//! Iteration skips gaps; they are never handed out as descriptors.
//!
//! Schemas are produced once per record type and shared read-only for the
//! lifetime of the process. Generated code keeps them in a `OnceLock` and hands
//! out `&'static Schema`; nested struct types are referenced through
//! [`SchemaRef`] so that recursive type graphs never have to be built eagerly.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::types::{TypeArgs, TypeTag};
use crate::value::Value;

/// Numeric field identifier as declared in the IDL
pub type FieldId = i16;

/// Lazily resolved handle to the schema of a nested record type
#[derive(Clone, Copy)]
pub struct SchemaRef(fn() -> &'static Schema);

impl SchemaRef {
    pub const fn new(resolve: fn() -> &'static Schema) -> Self {
        Self(resolve)
    }

    pub fn get(&self) -> &'static Schema {
        (self.0)()
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printing the target schema in full would recurse forever on
        // self-referential types.
        f.debug_tuple("SchemaRef").field(&self.get().name()).finish()
    }
}

/// One schema entry
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub tag: TypeTag,
    pub name: String,
    pub args: Option<TypeArgs>,
    pub default: Option<Value>,
    pub required: bool,
}

impl FieldDescriptor {
    /// A field whose absence is itself a validation failure
    pub fn required<N: Into<String>>(id: FieldId, tag: TypeTag, name: N) -> Self {
        Self {
            id,
            tag,
            name: name.into(),
            args: None,
            default: None,
            required: true,
        }
    }

    pub fn optional<N: Into<String>>(id: FieldId, tag: TypeTag, name: N) -> Self {
        Self {
            required: false,
            ..Self::required(id, tag, name)
        }
    }

    pub fn with_args(mut self, args: TypeArgs) -> Self {
        self.args = Some(args);
        self
    }

    pub fn with_default<V: Into<Value>>(mut self, default: V) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// Ordered field descriptor table of one record type
#[derive(Debug)]
pub struct Schema {
    name: String,
    slots: Vec<Option<FieldDescriptor>>,
}

impl Schema {
    /// Take a raw slot table as emitted by a generator, gap markers included.
    ///
    /// No consistency checks are made; use [`Schema::builder`] when the table
    /// is assembled by hand.
    pub fn from_slots<N: Into<String>>(name: N, slots: Vec<Option<FieldDescriptor>>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    pub fn builder<N: Into<String>>(name: N) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Name of the record type this schema describes
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptors in slot order, gaps skipped
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.slots.iter().flatten()
    }

    /// Raw slot table, gap markers included
    pub fn slots(&self) -> &[Option<FieldDescriptor>] {
        &self.slots
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldDescriptor> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.slots.get(index))
            .and_then(Option::as_ref)
            .filter(|descriptor| descriptor.id == id)
            .or_else(|| self.fields().find(|descriptor| descriptor.id == id))
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().find(|descriptor| descriptor.name == name)
    }

    /// Number of descriptors, not counting gaps
    pub fn len(&self) -> usize {
        self.fields().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assembles a [`Schema`] from descriptors, laying them out by id
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Check the guarantees the IDL compiler gives and build the slot table
    pub fn build(self) -> Result<Schema> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        let mut max_index = None;

        for descriptor in &self.fields {
            let index = usize::try_from(descriptor.id).map_err(|_| {
                Error::invalid_schema(
                    &self.name,
                    format!("negative field id {}", descriptor.id),
                    Some(&descriptor.name),
                )
            })?;
            if !ids.insert(descriptor.id) {
                return Err(Error::invalid_schema(
                    &self.name,
                    format!("duplicate field id {}", descriptor.id),
                    Some(&descriptor.name),
                ));
            }
            if !names.insert(descriptor.name.as_str()) {
                return Err(Error::invalid_schema(
                    &self.name,
                    format!("duplicate field name '{}'", descriptor.name),
                    Some(&descriptor.name),
                ));
            }
            check_args(&self.name, descriptor)?;
            max_index = max_index.max(Some(index));
        }

        let mut slots: Vec<Option<FieldDescriptor>> = match max_index {
            Some(max) => vec![None; max + 1],
            None => Vec::new(),
        };
        for descriptor in self.fields {
            let index = descriptor.id as usize;
            slots[index] = Some(descriptor);
        }

        tracing::trace!(schema = %self.name, slots = slots.len(), "built schema");
        Ok(Schema {
            name: self.name,
            slots,
        })
    }
}

fn check_args(schema: &str, descriptor: &FieldDescriptor) -> Result<()> {
    let needs_args = matches!(
        descriptor.tag,
        TypeTag::Struct | TypeTag::List | TypeTag::Set | TypeTag::Map
    );
    match &descriptor.args {
        None if needs_args => Err(Error::invalid_schema(
            schema,
            format!("{} field '{}' has no type arguments", descriptor.tag, descriptor.name),
            Some(&descriptor.name),
        )),
        Some(args) if !args.fits(descriptor.tag) => Err(Error::invalid_schema(
            schema,
            format!("type arguments of '{}' do not fit {}", descriptor.name, descriptor.tag),
            Some(&descriptor.name),
        )),
        _ => Ok(()),
    }
}
