//! Contains the Error and Result type produced by the decoder.

/// An error from decoding NBT data. Carries a human readable message and a
/// [`ErrorKind`] that callers can match on.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The kinds of failure a decode can hit. Every kind aborts the decode in
/// progress; no partial tree is returned.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to
    /// new variants.
    Other,

    /// The input ran out part way through a value, a name, or a declared
    /// length's worth of elements.
    UnexpectedEof,

    /// A tag type byte outside of the known ids 0 to 12. Contains the raw
    /// byte.
    InvalidTag(u8),

    /// The document did not begin with a compound tag. Contains the tag type
    /// byte actually found. Nothing past that byte has been consumed.
    InvalidRoot(u8),

    /// An End tag turned up where a concrete value was required, such as the
    /// element type of a non-empty list.
    UnexpectedEndTag,

    /// A list declared a zero or negative length. That encoding marks an
    /// unterminated list, which this decoder does not implement. Contains
    /// the declared length.
    UnsupportedListLength(i32),

    /// Expected unicode data but it was not valid. Contained bytes are the
    /// invalid unicode data.
    Nonunicode(Vec<u8>),
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid tag: {}", t),
            kind: ErrorKind::InvalidTag(t),
        }
    }

    pub(crate) fn invalid_root(t: u8) -> Self {
        Self {
            msg: format!("invalid root: expected compound, got tag {}", t),
            kind: ErrorKind::InvalidRoot(t),
        }
    }

    pub(crate) fn unexpected_end_tag() -> Self {
        Self {
            msg: "end tag is not a value".into(),
            kind: ErrorKind::UnexpectedEndTag,
        }
    }

    pub(crate) fn list_length(len: i32) -> Self {
        Self {
            msg: format!("unsupported list length: {}", len),
            kind: ErrorKind::UnsupportedListLength(len),
        }
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid string, non-unicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Nonunicode(data.to_vec()),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: e.to_string(),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Self {
                msg: e.to_string(),
                kind: ErrorKind::Other,
            },
        }
    }
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;
