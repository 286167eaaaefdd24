use core::marker::PhantomData;

use crate::{
    codec::Codec,
    context::DecodeContext,
    error::{Error, ErrorKind},
    writer::Writer,
};

/// Codec that encodes nothing and never decodes. See [`omit`].
#[derive(Debug)]
pub struct Omit<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Omit<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Omit<T> {}

impl<'de, T> Codec<'de> for Omit<T> {
    type Value = T;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<T, Error> {
        Err(ctx.error(ErrorKind::UnexpectedToken("nothing (omitted value)")))
    }

    fn encode(&self, _value: &T, _writer: &mut Writer) {}

    fn should_encode(&self, _value: &T) -> bool {
        false
    }
}

/// Codec that suppresses encoding entirely and fails every decode.
///
/// Only meaningful as the fallback of
/// [`empty_as_omit`](crate::codec::empty_as_omit), where it makes an object
/// field disappear when it holds its default value. A field whose codec
/// reports [`should_encode`](Codec::should_encode) `false` is skipped along
/// with its key.
#[must_use]
pub fn omit<T>() -> Omit<T> {
    Omit {
        _marker: PhantomData,
    }
}
