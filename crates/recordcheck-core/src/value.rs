//! Runtime values held in record slots

use std::fmt;

use crate::record::{Record, RecordDisplay};

/// Live value of a field, container element, map key or map value.
///
/// Integers are stored wide regardless of the declared tag so that a slot can
/// hold a value outside the BYTE or I16 range; catching that is the
/// validator's job, not the type system's.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Binary(Vec<u8>),
    Struct(Box<dyn Record>),
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    pub fn record<R: Record>(record: R) -> Self {
        Value::Struct(Box::new(record))
    }

    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn set<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Name of the runtime representation, in the vocabulary of
    /// [`TypeTag::representation`](crate::TypeTag::representation). Records
    /// report their schema name.
    pub fn representation(&self) -> &str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Binary(_) => "binary",
            Value::Struct(record) => record.schema().name(),
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Value::Struct(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    /// Downcast a struct value to its concrete record type
    pub fn downcast_record<R: Record>(&self) -> Option<&R> {
        self.as_record()
            .and_then(|record| record.as_any().downcast_ref::<R>())
    }

    /// Elements of a list or set; `None` for every other representation
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn elements_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn entries_mut(&mut self) -> Option<&mut Vec<(Value, Value)>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => same_members(a, b),
            (Value::Map(a), Value::Map(b)) => same_members(a, b),
            _ => false,
        }
    }
}

// Sets and maps are unordered.
fn same_members<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len()
        && a.iter().all(|x| b.contains(x))
        && b.iter().all(|y| a.contains(y))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(d) => write!(f, "{:?}", d),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Binary(bytes) => {
                write!(f, "b\"")?;
                for byte in bytes {
                    write!(f, "{}", std::ascii::escape_default(*byte))?;
                }
                write!(f, "\"")
            }
            Value::Struct(record) => write!(f, "{}", RecordDisplay(record.as_ref())),
            Value::List(items) => write_seq(f, "[", "]", items),
            Value::Set(items) => write_seq(f, "{", "}", items),
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, close: &str, items: &[Value]) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(close)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Value::Int(n.into())
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Binary(bytes)
    }
}
