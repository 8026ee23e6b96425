//! Record base contract
//!
//! Every generated record type exposes its [`Schema`] and one slot per
//! declared field. Structural equality, the printable representation and the
//! codec entry points are all derived from that alone; this module performs no
//! validation and knows nothing about the wire format.

use std::any::Any;
use std::fmt;

use crate::error::Result;
use crate::schema::{FieldId, Schema};
use crate::value::Value;

/// A populated instance of a record type described by a [`Schema`]
pub trait Record: Any + Send + Sync + 'static {
    /// Schema of this record's type
    fn schema(&self) -> &'static Schema;

    /// Slot of the field with the given id, `None` if the id is not declared
    fn slot(&self, id: FieldId) -> Option<&Option<Value>>;

    fn slot_mut(&mut self, id: FieldId) -> Option<&mut Option<Value>>;

    fn clone_record(&self) -> Box<dyn Record>;

    fn as_any(&self) -> &dyn Any;

    /// Current value of a field; `None` when absent or undeclared
    fn get(&self, id: FieldId) -> Option<&Value> {
        self.slot(id).and_then(Option::as_ref)
    }

    fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.schema()
            .field_by_name(name)
            .and_then(|descriptor| self.get(descriptor.id))
    }

    /// Replace a field's value, returning the previous one.
    ///
    /// Undeclared ids are ignored.
    fn set(&mut self, id: FieldId, value: Option<Value>) -> Option<Value> {
        let record = self.schema().name();
        match self.slot_mut(id) {
            Some(slot) => std::mem::replace(slot, value),
            None => {
                tracing::trace!(record, id, "ignoring undeclared field id");
                None
            }
        }
    }

    /// Fill absent slots from the schema's declared defaults
    fn apply_defaults(&mut self) {
        let schema = self.schema();
        for descriptor in schema.fields() {
            if let (Some(default), Some(slot)) = (descriptor.default_value(), self.slot_mut(descriptor.id)) {
                if slot.is_none() {
                    *slot = Some(default.clone());
                }
            }
        }
    }

    /// Populate this record through an external codec
    fn read(&mut self, codec: &mut dyn Codec) -> Result<()>
    where
        Self: Sized,
    {
        let schema = self.schema();
        codec.read_struct(self, schema)
    }

    /// Serialize this record through an external codec
    fn write(&self, codec: &mut dyn Codec) -> Result<()>
    where
        Self: Sized,
    {
        codec.write_struct(self, self.schema())
    }
}

/// Wire codec the record base delegates encoding and decoding to
pub trait Codec {
    fn read_struct(&mut self, record: &mut dyn Record, schema: &Schema) -> Result<()>;

    fn write_struct(&mut self, record: &dyn Record, schema: &Schema) -> Result<()>;
}

/// Structural equality: same concrete type and every declared field equal.
///
/// An absent slot equals an absent slot.
pub fn records_equal(a: &dyn Record, b: &dyn Record) -> bool {
    if a.as_any().type_id() != b.as_any().type_id() {
        return false;
    }
    a.schema()
        .fields()
        .all(|descriptor| a.get(descriptor.id) == b.get(descriptor.id))
}

impl PartialEq for dyn Record {
    fn eq(&self, other: &Self) -> bool {
        records_equal(self, other)
    }
}

impl Clone for Box<dyn Record> {
    fn clone(&self) -> Self {
        self.clone_record()
    }
}

/// Printable representation `Name(field=value, ...)` of a record
pub struct RecordDisplay<'a>(pub &'a dyn Record);

impl fmt::Display for RecordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schema = self.0.schema();
        write!(f, "{}(", schema.name())?;
        for (i, descriptor) in schema.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.0.get(descriptor.id) {
                Some(value) => write!(f, "{}={}", descriptor.name, value)?,
                None => write!(f, "{}=None", descriptor.name)?,
            }
        }
        write!(f, ")")
    }
}

impl fmt::Debug for dyn Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&RecordDisplay(self), f)
    }
}

/// Declare a record type: a struct with one optional [`Value`] slot per field
/// and a [`Record`] implementation mapping field ids to those slots.
///
/// This is the shape the IDL compiler emits. The schema is supplied as a
/// function returning `&'static Schema`.
///
/// ```
/// use std::sync::OnceLock;
/// use recordcheck_core::{record_type, FieldDescriptor, Schema, TypeTag, Value};
///
/// fn point_schema() -> &'static Schema {
///     static SCHEMA: OnceLock<Schema> = OnceLock::new();
///     SCHEMA.get_or_init(|| {
///         Schema::from_slots("Point", vec![
///             None,
///             Some(FieldDescriptor::required(1, TypeTag::I32, "x")),
///             Some(FieldDescriptor::optional(2, TypeTag::I32, "y").with_default(0)),
///         ])
///     })
/// }
///
/// record_type! {
///     pub struct Point {
///         1 => x,
///         2 => y,
///     }
///     schema = point_schema;
/// }
///
/// let point = Point::new();
/// assert_eq!(point.y, Some(Value::Int(0)));
/// assert_eq!(point.to_string(), "Point(x=None, y=0)");
/// ```
#[macro_export]
macro_rules! record_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $id:literal => $field:ident ),* $(,)?
        }
        schema = $schema:path;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( pub $field: Option<$crate::Value>, )*
        }

        impl $name {
            /// New instance with schema defaults applied
            pub fn new() -> Self {
                let mut record = Self::default();
                $crate::Record::apply_defaults(&mut record);
                record
            }
        }

        impl $crate::Record for $name {
            fn schema(&self) -> &'static $crate::Schema {
                $schema()
            }

            fn slot(&self, id: $crate::FieldId) -> Option<&Option<$crate::Value>> {
                match id {
                    $( $id => Some(&self.$field), )*
                    _ => None,
                }
            }

            fn slot_mut(&mut self, id: $crate::FieldId) -> Option<&mut Option<$crate::Value>> {
                match id {
                    $( $id => Some(&mut self.$field), )*
                    _ => None,
                }
            }

            fn clone_record(&self) -> Box<dyn $crate::Record> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&$crate::RecordDisplay(self), f)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecOperation, Error};
    use crate::schema::FieldDescriptor;
    use crate::types::TypeTag;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use std::sync::OnceLock;

    fn pair_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Pair")
                .field(FieldDescriptor::required(1, TypeTag::String, "name"))
                .field(FieldDescriptor::optional(3, TypeTag::I64, "count").with_default(10i64))
                .build()
                .unwrap()
        })
    }

    fn twin_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Twin")
                .field(FieldDescriptor::required(1, TypeTag::String, "name"))
                .field(FieldDescriptor::optional(3, TypeTag::I64, "count"))
                .build()
                .unwrap()
        })
    }

    crate::record_type! {
        struct Pair {
            1 => name,
            3 => count,
        }
        schema = pair_schema;
    }

    crate::record_type! {
        struct Twin {
            1 => name,
            3 => count,
        }
        schema = twin_schema;
    }

    /// Stores field values by id instead of producing bytes
    #[derive(Default)]
    struct SlotCodec {
        stored: BTreeMap<FieldId, Value>,
        fail: bool,
    }

    impl Codec for SlotCodec {
        fn read_struct(&mut self, record: &mut dyn Record, schema: &Schema) -> Result<()> {
            if self.fail {
                return Err(Error::codec(CodecOperation::Read, schema.name(), "truncated", None));
            }
            for descriptor in schema.fields() {
                record.set(descriptor.id, self.stored.get(&descriptor.id).cloned());
            }
            Ok(())
        }

        fn write_struct(&mut self, record: &dyn Record, schema: &Schema) -> Result<()> {
            for descriptor in schema.fields() {
                if let Some(value) = record.get(descriptor.id) {
                    self.stored.insert(descriptor.id, value.clone());
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_new_applies_defaults() {
        let pair = Pair::new();
        assert_eq!(pair.name, None);
        assert_eq!(pair.count, Some(Value::Int(10)));
    }

    #[test]
    fn test_get_and_set_by_id() {
        let mut pair = Pair::new();
        assert_eq!(pair.set(1, Some("left".into())), None);
        assert_eq!(pair.get(1), Some(&Value::from("left")));
        assert_eq!(pair.get_by_name("name"), Some(&Value::from("left")));
        assert_eq!(pair.set(2, Some(Value::Int(1))), None);
        assert_eq!(pair.get(2), None);
    }

    #[test]
    fn test_structural_equality() {
        let a: Box<dyn Record> = Box::new(Pair::new());
        let b: Box<dyn Record> = Box::new(Pair::new());
        assert!(records_equal(a.as_ref(), b.as_ref()));

        let mut c = Pair::new();
        c.name = Some("x".into());
        let c: Box<dyn Record> = Box::new(c);
        assert!(!records_equal(a.as_ref(), c.as_ref()));
    }

    #[test]
    fn test_same_fields_different_type_are_not_equal() {
        let pair = Pair { name: None, count: None };
        let twin = Twin { name: None, count: None };
        assert!(!records_equal(&pair, &twin));
    }

    #[test]
    fn test_printable_representation() {
        let mut pair = Pair::new();
        pair.name = Some("left".into());
        assert_eq!(pair.to_string(), "Pair(name=\"left\", count=10)");

        let boxed: Box<dyn Record> = Box::new(Pair::default());
        assert_eq!(format!("{:?}", boxed), "Pair(name=None, count=None)");
    }

    #[test]
    fn test_codec_delegation() {
        let mut pair = Pair::new();
        pair.name = Some("left".into());

        let mut codec = SlotCodec::default();
        pair.write(&mut codec).unwrap();

        let mut decoded = Pair::default();
        decoded.read(&mut codec).unwrap();
        assert_eq!(decoded, pair);
    }

    #[test]
    fn test_codec_failure_propagates() {
        let mut codec = SlotCodec {
            fail: true,
            ..SlotCodec::default()
        };
        let mut pair = Pair::default();
        let err = pair.read(&mut codec).unwrap_err();
        assert!(matches!(err, Error::Codec { operation: CodecOperation::Read, .. }));
    }

    #[test]
    fn test_clone_box_is_deep() {
        let original: Box<dyn Record> = Box::new(Pair::new());
        let copy = original.clone();
        assert!(records_equal(original.as_ref(), copy.as_ref()));
        assert!(copy.as_any().downcast_ref::<Pair>().is_some());
    }

    #[test]
    fn test_nested_value_downcasts_to_its_record_type() {
        let mut pair = Pair::new();
        pair.name = Some("inner".into());
        let value = Value::record(pair);

        let inner = value.downcast_record::<Pair>().unwrap();
        assert_eq!(inner.name, Some(Value::from("inner")));
        assert!(value.downcast_record::<Twin>().is_none());
        assert!(Value::from(1).downcast_record::<Pair>().is_none());
    }
}
