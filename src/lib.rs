//! nbtree parses NBT data from *Minecraft: Java Edition* into an owned tree
//! of tags. This format is used by the game to store various things, such as
//! the world data and player inventories.
//!
//! * For the decoder and its entry points see [`de`].
//! * For the tree itself see [`NamedTag`] and [`Value`].
//! * For the errors a decode can produce see [`error`].
//!
//! The decoder works on anything implementing [`Read`][`std::io::Read`], so
//! decompression can be layered underneath it by the caller. It consumes the
//! input strictly forwards and produces the fully materialized document, or
//! the first error it hits. There is no partial result and no encoder.
//!
//! # Quick example
//!
//! Decoding an uncompressed level.dat-like document and pulling a field out
//! of the root compound:
//!
//! ```no_run
//! use nbtree::{from_bytes, Value};
//!
//! # fn main() -> nbtree::error::Result<()> {
//! # let data: Vec<u8> = vec![];
//! let root = from_bytes(&data)?;
//!
//! if let Value::Compound(entries) = &root.value {
//!     if let Some(version) = entries.get("DataVersion") {
//!         println!("version: {:?}", version.value.as_i64());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Compounds do not preserve the order keys appeared on the wire unless the
//! `preserve-order` feature is enabled, which swaps the backing map for
//! [`indexmap::IndexMap`].

pub mod de;
pub mod error;

mod value;

pub use de::{from_bytes, from_reader, Decoder};
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

/// An NBT tag type. This carries no value or name, only which kind of tag a
/// wire id names.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a Compound. Never a value in its own right.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A string in Java's modified UTF-8.
    String = 8,
    /// An ordered list of unnamed tags, all of one element type.
    List = 9,
    /// A set of uniquely named tags.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
}

impl Tag {
    /// The canonical display name for this tag type.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_END",
            Tag::Byte => "TAG_BYTE",
            Tag::Short => "TAG_SHORT",
            Tag::Int => "TAG_INT",
            Tag::Long => "TAG_LONG",
            Tag::Float => "TAG_FLOAT",
            Tag::Double => "TAG_DOUBLE",
            Tag::ByteArray => "TAG_BYTE_ARRAY",
            Tag::String => "TAG_STRING",
            Tag::List => "TAG_LIST",
            Tag::Compound => "TAG_COMPOUND",
            Tag::IntArray => "TAG_INT_ARRAY",
            Tag::LongArray => "TAG_LONG_ARRAY",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Crates exist to generate these conversions for us, but the tag ids will
// very rarely change, so writing them out saves the compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
