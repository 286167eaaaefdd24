use core::marker::PhantomData;

use crate::{codec::Codec, context::DecodeContext, error::Error, writer::Writer};

/// Codec for the literal `null`. See [`null`].
#[derive(Debug)]
pub struct Null<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Null<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Null<T> {}

impl<'de, T: Default> Codec<'de> for Null<T> {
    type Value = T;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<T, Error> {
        ctx.expect_literal(b"null", "'null'")?;
        Ok(T::default())
    }

    fn encode(&self, _value: &T, writer: &mut Writer) {
        writer.write_null();
    }
}

/// Codec that decodes the literal `null` into `T::default()` and encodes
/// any value as `null`.
///
/// Rarely used standalone; typically the fallback inside
/// [`empty_as_null`](crate::codec::empty_as_null).
#[must_use]
pub fn null<T: Default>() -> Null<T> {
    Null {
        _marker: PhantomData,
    }
}
