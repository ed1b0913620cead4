use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::fmt::Formatter;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::query::Operation;

/// The single dynamically-typed unit flowing through every pipeline.
///
/// Values are immutable; `Text` and `Sequence` share their payload, so
/// cloning is cheap and outputs may share structure with their inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Integer(i64),
    Text(Rc<str>),
    Unit,
    Sequence(Rc<[Value]>),
    TypeTag(Kind),
}

/// Symbolic tag naming one of the `Value` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Text,
    Unit,
    Sequence,
    TypeTag,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "Integer",
            Kind::Text => "Text",
            Kind::Unit => "Unit",
            Kind::Sequence => "Sequence",
            Kind::TypeTag => "TypeTag",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn text(text: &str) -> Self {
        Value::Text(Rc::from(text))
    }

    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Sequence(items.into_iter().collect())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Text(_) => Kind::Text,
            Value::Unit => Kind::Unit,
            Value::Sequence(_) => Kind::Sequence,
            Value::TypeTag(_) => Kind::TypeTag,
        }
    }

    /// Elements of a sequence, `None` for anything that is not iterable.
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(&items[..]),
            _ => None,
        }
    }

    pub fn length(&self) -> Result<Value> {
        match self {
            Value::Sequence(items) => Ok(Value::Integer(items.len() as i64)),
            Value::Text(text) => Ok(Value::Integer(text.chars().count() as i64)),
            other => Err(Error::TypeMismatch {
                operation: "length",
                lhs: other.kind(),
                rhs: None,
            }),
        }
    }

    /// Applies an integer operator; any other pair of variants is a type mismatch.
    pub fn calculate(&self, op: Operation, rhs: &Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Integer(lhs), Value::Integer(rhs)) => op.apply(*lhs, *rhs).map(Value::Integer),
            (lhs, rhs) => Err(Error::TypeMismatch {
                operation: op.name(),
                lhs: lhs.kind(),
                rhs: Some(rhs.kind()),
            }),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::text(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(Rc::from(text))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(Rc::from(items))
    }
}

impl From<Kind> for Value {
    fn from(kind: Kind) -> Self {
        Value::TypeTag(kind)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Text(text) => write!(f, "{}", text),
            Value::Unit => write!(f, "()"),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        Value::Text(text) => write!(f, "{:?}", text)?,
                        other => write!(f, "{}", other)?,
                    }
                }
                write!(f, "]")
            }
            Value::TypeTag(kind) => write!(f, "<type {}>", kind),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for value in items.iter() {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Value::Text(text) => serializer.serialize_str(text),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::TypeTag(kind) => serializer.collect_str(kind),
            Value::Unit => serializer.serialize_unit(),
        }
    }
}
