use core::marker::PhantomData;

use crate::{
    codec::Codec, context::DecodeContext, error::Error, number::JsonNumber, writer::Writer,
};

/// Codec for one numeric type. See [`number`].
#[derive(Debug)]
pub struct Number<N> {
    _marker: PhantomData<fn() -> N>,
}

impl<N> Clone for Number<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Number<N> {}

impl<'de, N: JsonNumber> Codec<'de> for Number<N> {
    type Value = N;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<N, Error> {
        N::decode_number(ctx)
    }

    fn encode(&self, value: &N, writer: &mut Writer) {
        writer.write_number(*value);
    }
}

/// Codec mapping JSON numbers to `N`.
///
/// Integer targets require the literal to be integral and in range; float
/// targets accept the full grammar and round to nearest.
#[must_use]
pub fn number<N: JsonNumber>() -> Number<N> {
    Number {
        _marker: PhantomData,
    }
}
