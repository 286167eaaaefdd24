use crate::{
    codec::Codec,
    context::DecodeContext,
    error::{Error, ErrorKind},
    writer::Writer,
};

/// Codec for `bool`. See [`boolean`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boolean;

impl<'de> Codec<'de> for Boolean {
    type Value = bool;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<bool, Error> {
        match ctx.require_peek()? {
            b't' => {
                ctx.expect_literal(b"true", "'true'")?;
                Ok(true)
            }
            b'f' => {
                ctx.expect_literal(b"false", "'false'")?;
                Ok(false)
            }
            _ => Err(ctx.error(ErrorKind::UnexpectedToken("boolean"))),
        }
    }

    fn encode(&self, value: &bool, writer: &mut Writer) {
        writer.write_bool(*value);
    }
}

/// Codec mapping JSON `true`/`false` to `bool`.
#[must_use]
pub fn boolean() -> Boolean {
    Boolean
}
