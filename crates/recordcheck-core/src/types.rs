//! Wire type tags and the nested type arguments attached to composite fields

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::SchemaRef;

/// Closed vocabulary of wire types a field can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeTag {
    Stop,
    Void,
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    Struct,
    Map,
    Set,
    List,
}

impl TypeTag {
    /// Wire number used by the binary and compact protocols.
    ///
    /// BINARY shares its number with STRING; the distinction only exists in
    /// the schema.
    pub fn as_wire(self) -> u8 {
        match self {
            TypeTag::Stop => 0,
            TypeTag::Void => 1,
            TypeTag::Bool => 2,
            TypeTag::Byte => 3,
            TypeTag::Double => 4,
            TypeTag::I16 => 6,
            TypeTag::I32 => 8,
            TypeTag::I64 => 10,
            TypeTag::String | TypeTag::Binary => 11,
            TypeTag::Struct => 12,
            TypeTag::Map => 13,
            TypeTag::Set => 14,
            TypeTag::List => 15,
        }
    }

    /// Inverse of [`TypeTag::as_wire`]; wire number 11 resolves to STRING
    pub fn from_wire(wire: u8) -> Option<Self> {
        let tag = match wire {
            0 => TypeTag::Stop,
            1 => TypeTag::Void,
            2 => TypeTag::Bool,
            3 => TypeTag::Byte,
            4 => TypeTag::Double,
            6 => TypeTag::I16,
            8 => TypeTag::I32,
            10 => TypeTag::I64,
            11 => TypeTag::String,
            12 => TypeTag::Struct,
            13 => TypeTag::Map,
            14 => TypeTag::Set,
            15 => TypeTag::List,
            _ => return None,
        };
        Some(tag)
    }

    /// Canonical native representation a value of this tag must have.
    ///
    /// STRUCT reports the generic `struct` here; the exact expected record
    /// type comes from the field's [`TypeArgs::Struct`]. VOID and STOP have
    /// no representation and return `None`.
    pub fn representation(self) -> Option<&'static str> {
        match self {
            TypeTag::Stop | TypeTag::Void => None,
            TypeTag::Bool => Some("bool"),
            TypeTag::Byte | TypeTag::I16 | TypeTag::I32 | TypeTag::I64 => Some("integer"),
            TypeTag::Double => Some("double"),
            TypeTag::String => Some("string"),
            TypeTag::Binary => Some("binary"),
            TypeTag::Struct => Some("struct"),
            TypeTag::Map => Some("map"),
            TypeTag::Set => Some("set"),
            TypeTag::List => Some("list"),
        }
    }

    /// Inclusive bounds for tags narrower than their integer representation
    pub fn integer_range(self) -> Option<(i64, i64)> {
        match self {
            TypeTag::Byte => Some((i8::MIN as i64, i8::MAX as i64)),
            TypeTag::I16 => Some((i16::MIN as i64, i16::MAX as i64)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Stop => "STOP",
            TypeTag::Void => "VOID",
            TypeTag::Bool => "BOOL",
            TypeTag::Byte => "BYTE",
            TypeTag::I16 => "I16",
            TypeTag::I32 => "I32",
            TypeTag::I64 => "I64",
            TypeTag::Double => "DOUBLE",
            TypeTag::String => "STRING",
            TypeTag::Binary => "BINARY",
            TypeTag::Struct => "STRUCT",
            TypeTag::Map => "MAP",
            TypeTag::Set => "SET",
            TypeTag::List => "LIST",
        };
        f.write_str(name)
    }
}

/// Legal values of an enum bound to an I32 field
#[derive(Debug)]
pub struct EnumDef {
    pub name: &'static str,
    pub values: &'static [(i32, &'static str)],
}

impl EnumDef {
    pub const fn new(name: &'static str, values: &'static [(i32, &'static str)]) -> Self {
        Self { name, values }
    }

    /// Whether `value` is one of the declared enum values
    pub fn contains(&self, value: i64) -> bool {
        self.values.iter().any(|(v, _)| i64::from(*v) == value)
    }

    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, name)| *name)
    }
}

/// Tag plus nested arguments of a container element, map key or map value
#[derive(Debug, Clone)]
pub struct ElementType {
    pub tag: TypeTag,
    pub args: Option<TypeArgs>,
}

impl ElementType {
    pub fn new(tag: TypeTag) -> Self {
        Self { tag, args: None }
    }

    pub fn with_args(tag: TypeTag, args: TypeArgs) -> Self {
        Self {
            tag,
            args: Some(args),
        }
    }
}

/// Nested type arguments carried by composite field descriptors
#[derive(Debug, Clone)]
pub enum TypeArgs {
    /// Schema of the nested record type of a STRUCT
    Struct(SchemaRef),
    /// Value set of an enum-typed I32
    Enum(&'static EnumDef),
    /// Element type of a LIST or SET
    Elements(Box<ElementType>),
    /// Key and value types of a MAP
    Map {
        key: Box<ElementType>,
        value: Box<ElementType>,
    },
}

impl TypeArgs {
    /// Elements of the given primitive tag
    pub fn elements(tag: TypeTag) -> Self {
        TypeArgs::Elements(Box::new(ElementType::new(tag)))
    }

    /// Elements with nested arguments of their own
    pub fn nested_elements(element: ElementType) -> Self {
        TypeArgs::Elements(Box::new(element))
    }

    pub fn map(key: ElementType, value: ElementType) -> Self {
        TypeArgs::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Whether these arguments have the shape `tag` requires
    pub fn fits(&self, tag: TypeTag) -> bool {
        matches!(
            (self, tag),
            (TypeArgs::Struct(_), TypeTag::Struct)
                | (TypeArgs::Enum(_), TypeTag::I32)
                | (TypeArgs::Elements(_), TypeTag::List | TypeTag::Set)
                | (TypeArgs::Map { .. }, TypeTag::Map)
        )
    }
}
