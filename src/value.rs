#[cfg(not(feature = "preserve-order"))]
use std::collections::HashMap;

use crate::Tag;

/// An optional `String`. Tags decoded as compound children or as the document
/// root carry their name; tags decoded as list elements have none.
pub type Name = Option<String>;

/// The map compounds decode into. Key order is arbitrary by default; the
/// `preserve-order` feature swaps this for [`indexmap::IndexMap`], which
/// keeps the order the keys appeared on the wire.
#[cfg(not(feature = "preserve-order"))]
pub type CompoundMap = HashMap<String, NamedTag>;

#[cfg(feature = "preserve-order")]
pub type CompoundMap = indexmap::IndexMap<String, NamedTag>;

/// One decoded tag: its payload plus the name it had at its decode site.
///
/// A compound child's name here mirrors its key in the enclosing
/// [`CompoundMap`]. The whole tree is built in a single forward pass over
/// the input and owns its data outright.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
    pub name: Name,
    pub value: Value,
}

impl NamedTag {
    /// The tag type of this tag's payload.
    pub fn tag(&self) -> Tag {
        self.value.tag()
    }
}

/// A complete NBT value. Lists record their element type once and hold their
/// children in wire order; compounds map each child's name to the child.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(Tag, Vec<NamedTag>),
    Compound(CompoundMap),
}

impl Value {
    /// The tag type of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::List(_, _) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundMap> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NamedTag]> {
        match self {
            Value::List(_, v) => Some(v),
            _ => None,
        }
    }
}
