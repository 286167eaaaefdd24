use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::{codec::Codec, context::DecodeContext, error::Error, scan, writer::Writer};

/// A non-owning view of the exact source bytes of one JSON value.
///
/// Produced by the [`raw`] codec: the value is structurally validated but
/// not interpreted, and no bytes are copied. The view is tied to the input
/// buffer's lifetime; call [`to_vec`](RawRef::to_vec) to materialize an
/// owned copy that outlives it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawRef<'de> {
    bytes: &'de [u8],
}

impl<'de> RawRef<'de> {
    /// Wraps a span of pre-formed JSON.
    #[must_use]
    pub fn new(bytes: &'de [u8]) -> Self {
        Self { bytes }
    }

    /// The source bytes of the value.
    #[must_use]
    pub fn as_bytes(&self) -> &'de [u8] {
        self.bytes
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the span is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies the span into an owned buffer.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl fmt::Debug for RawRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawRef({:?})", BStr::new(self.bytes))
    }
}

/// Borrowing raw codec. See [`raw`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raw;

impl<'de> Codec<'de> for Raw {
    type Value = RawRef<'de>;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<RawRef<'de>, Error> {
        let start = ctx.offset();
        scan::skip_value(ctx)?;
        Ok(RawRef::new(&ctx.input()[start..ctx.offset()]))
    }

    fn encode(&self, value: &RawRef<'de>, writer: &mut Writer) {
        writer.write_raw(value.bytes);
    }
}

/// Codec that records the span of the next well-formed JSON value without
/// interpreting it.
///
/// Decoding performs a single structural scan (string-aware bracket
/// balancing with an explicit stack, so arbitrarily deep nesting cannot
/// exhaust the call stack) and returns a [`RawRef`] into the input buffer.
/// Encoding copies the span verbatim; it is already valid JSON.
#[must_use]
pub fn raw() -> Raw {
    Raw
}

/// Owning raw codec. See [`raw_owned`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawOwned;

impl<'de> Codec<'de> for RawOwned {
    type Value = Vec<u8>;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<Vec<u8>, Error> {
        let start = ctx.offset();
        scan::skip_value(ctx)?;
        Ok(ctx.input()[start..ctx.offset()].to_vec())
    }

    fn encode(&self, value: &Vec<u8>, writer: &mut Writer) {
        writer.write_raw(value);
    }
}

/// Like [`raw`], but explicitly materializes the span into an owned buffer
/// so the decoded value may outlive the input.
#[must_use]
pub fn raw_owned() -> RawOwned {
    RawOwned
}
