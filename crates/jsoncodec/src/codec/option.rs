use crate::{codec::Codec, context::DecodeContext, error::Error, writer::Writer};

/// Codec for `Option<T>`. See [`option`] and [`option_or_omit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionCodec<C> {
    inner: C,
    omit_none: bool,
}

impl<'de, C: Codec<'de>> Codec<'de> for OptionCodec<C> {
    type Value = Option<C::Value>;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<Option<C::Value>, Error> {
        if ctx.peek() == Some(b'n') {
            ctx.expect_literal(b"null", "'null'")?;
            Ok(None)
        } else {
            self.inner.decode(ctx).map(Some)
        }
    }

    fn encode(&self, value: &Option<C::Value>, writer: &mut Writer) {
        match value {
            Some(inner) => self.inner.encode(inner, writer),
            None => writer.write_null(),
        }
    }

    fn should_encode(&self, value: &Option<C::Value>) -> bool {
        match value {
            Some(inner) => self.inner.should_encode(inner),
            None => !self.omit_none,
        }
    }
}

/// Codec mapping `null` to `None` and anything else through `inner`.
///
/// `None` encodes as `null`.
#[must_use]
pub fn option<C>(inner: C) -> OptionCodec<C> {
    OptionCodec {
        inner,
        omit_none: false,
    }
}

/// Like [`option`], but when used as an object field, `None` is omitted
/// along with its key instead of being written as `null`. An absent field
/// decodes as `None` (the record's default).
#[must_use]
pub fn option_or_omit<C>(inner: C) -> OptionCodec<C> {
    OptionCodec {
        inner,
        omit_none: true,
    }
}
