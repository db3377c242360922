//! Decoding of NBT documents from a [`Read`][`std::io::Read`] source.
//!
//! The entry points are [`from_reader`] and [`from_bytes`], which both read
//! exactly one document: a named compound followed by its END-terminated
//! body. Decoding is a single depth-first pass over the input; it never
//! seeks or rewinds, so the reader only needs to hand over bytes in order.
//! Compressed data should be wrapped in a decompressing reader first.
//!
//! ```no_run
//! use nbtree::from_reader;
//!
//! # fn main() -> nbtree::error::Result<()> {
//! let file = std::fs::File::open("level.dat").unwrap();
//! let doc = from_reader(file)?;
//!
//! println!("root is named {:?}", doc.name);
//! # Ok(())
//! # }
//! ```

use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::{CompoundMap, NamedTag, Tag, Value};

/// Decode a complete NBT document from a reader. The document's entire byte
/// stream is consumed; nothing is read past its terminating END tag.
pub fn from_reader<R: Read>(reader: R) -> Result<NamedTag> {
    Decoder::new(reader).read_document()
}

/// Decode a complete NBT document from a byte slice.
pub fn from_bytes(bytes: &[u8]) -> Result<NamedTag> {
    from_reader(bytes)
}

/// Decoder for NBT data. Wraps any reader and pulls exactly one document
/// out of it. Does not do decompression.
pub struct Decoder<R: Read> {
    reader: R,
}

impl<R: Read> Decoder<R> {
    /// Create a new decoder for the given reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read one document: a compound tag, its name, then its body. Fails
    /// with [`ErrorKind::InvalidRoot`][`crate::error::ErrorKind`] without
    /// consuming anything past the first byte if the stream does not start
    /// with a compound.
    pub fn read_document(&mut self) -> Result<NamedTag> {
        let tag = self.read_tag()?;
        if tag != Tag::Compound {
            return Err(Error::invalid_root(tag.into()));
        }

        let name = self.read_string()?;
        let value = Value::Compound(self.read_compound()?);

        Ok(NamedTag {
            name: Some(name),
            value,
        })
    }

    fn read_tag(&mut self) -> Result<Tag> {
        let tag = self.reader.read_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()? as usize;

        let mut buf = vec![0; len];
        self.reader.read_exact(&mut buf[..])?;

        Ok(cesu8::from_java_cesu8(&buf[..])
            .map_err(|_| Error::nonunicode(&buf[..]))?
            .into_owned())
    }

    /// Read the payload of a tag of the given type. This is the single
    /// dispatch point the recursive decode goes through; list elements and
    /// compound children alike come back through here.
    fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        match tag {
            Tag::End => Err(Error::unexpected_end_tag()),
            Tag::Byte => Ok(Value::Byte(self.reader.read_i8()?)),
            Tag::Short => Ok(Value::Short(self.reader.read_i16::<BigEndian>()?)),
            Tag::Int => Ok(Value::Int(self.reader.read_i32::<BigEndian>()?)),
            Tag::Long => Ok(Value::Long(self.reader.read_i64::<BigEndian>()?)),
            Tag::Float => Ok(Value::Float(self.reader.read_f32::<BigEndian>()?)),
            Tag::Double => Ok(Value::Double(self.reader.read_f64::<BigEndian>()?)),
            Tag::String => Ok(Value::String(self.read_string()?)),
            Tag::ByteArray => {
                // A zero or negative declared length is an empty array, not
                // an error. The element loops are empty for len <= 0.
                let len = self.reader.read_i32::<BigEndian>()?;
                let mut data = Vec::with_capacity(len.max(0) as usize);
                for _ in 0..len {
                    data.push(self.reader.read_i8()?);
                }
                Ok(Value::ByteArray(data))
            }
            Tag::IntArray => {
                let len = self.reader.read_i32::<BigEndian>()?;
                let mut data = Vec::with_capacity(len.max(0) as usize);
                for _ in 0..len {
                    data.push(self.reader.read_i32::<BigEndian>()?);
                }
                Ok(Value::IntArray(data))
            }
            Tag::LongArray => {
                let len = self.reader.read_i32::<BigEndian>()?;
                let mut data = Vec::with_capacity(len.max(0) as usize);
                for _ in 0..len {
                    data.push(self.reader.read_i64::<BigEndian>()?);
                }
                Ok(Value::LongArray(data))
            }
            Tag::List => self.read_list(),
            Tag::Compound => Ok(Value::Compound(self.read_compound()?)),
        }
    }

    fn read_list(&mut self) -> Result<Value> {
        let element_tag = self.read_tag()?;
        let len = self.reader.read_i32::<BigEndian>()?;

        // Unlike arrays, a non-positive list length is the wire format's
        // marker for an unterminated list, which is not implemented here.
        if len <= 0 {
            return Err(Error::list_length(len));
        }

        let mut elements = Vec::with_capacity(len as usize);
        for _ in 0..len {
            elements.push(NamedTag {
                name: None,
                value: self.read_payload(element_tag)?,
            });
        }

        Ok(Value::List(element_tag, elements))
    }

    fn read_compound(&mut self) -> Result<CompoundMap> {
        let mut entries = CompoundMap::new();

        loop {
            let tag = self.read_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.read_string()?;
            let value = self.read_payload(tag)?;

            // Duplicate names are malformed input; the later entry wins.
            entries.insert(
                name.clone(),
                NamedTag {
                    name: Some(name),
                    value,
                },
            );
        }

        Ok(entries)
    }
}
