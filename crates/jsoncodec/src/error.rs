use alloc::string::String;

use thiserror::Error;

/// A decode failure, carrying the byte offset at which decoding first went
/// wrong.
///
/// Combinators stop at the first inner error, so the offset always points at
/// the earliest failure rather than at any later cascading one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
}

impl Error {
    /// Creates an error for the given byte offset.
    #[must_use]
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the input at which decoding failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The decode error taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// The byte at the cursor does not start any expected production.
    #[error("unexpected token, expected {0}")]
    UnexpectedToken(&'static str),
    /// A string escape sequence is malformed.
    #[error("invalid string escape '\\{0}'")]
    InvalidEscape(char),
    /// A unicode escape or byte sequence does not denote a valid scalar.
    #[error("invalid unicode sequence U+{0:04X}")]
    InvalidUnicode(u32),
    /// A numeric literal does not fit the target type.
    #[error("number out of range for target type")]
    NumberOutOfRange,
    /// An object finished decoding without a required field being seen.
    #[error("missing required field \"{0}\"")]
    MissingRequiredField(String),
    /// Non-whitespace input remained after the top-level value.
    #[error("unconsumed input after value")]
    TrailingInput,
}
