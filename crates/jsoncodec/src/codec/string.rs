use alloc::string::String;

use crate::{codec::Codec, context::DecodeContext, error::Error, escape, writer::Writer};

/// Codec for `String`. See [`string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCodec;

impl<'de> Codec<'de> for StringCodec {
    type Value = String;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<String, Error> {
        escape::decode_string(ctx)
    }

    fn encode(&self, value: &String, writer: &mut Writer) {
        writer.write_string(value);
    }
}

/// Codec mapping JSON strings to owned `String`s, unescaping on decode and
/// escaping on encode.
#[must_use]
pub fn string() -> StringCodec {
    StringCodec
}
