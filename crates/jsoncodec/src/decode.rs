//! Top-level decode entry points.

use crate::{
    codec::Codec,
    context::DecodeContext,
    error::{Error, ErrorKind},
    standard::DefaultCodec,
};

/// Decodes one value from `input`, requiring the whole buffer to be
/// consumed.
///
/// Leading and trailing whitespace around the top-level value is tolerated;
/// any other unconsumed bytes fail with `TrailingInput`.
pub fn decode<'de, C>(codec: &C, input: &'de [u8]) -> Result<C::Value, Error>
where
    C: Codec<'de>,
{
    let mut ctx = DecodeContext::new(input);
    ctx.skip_whitespace();
    let value = codec.decode(&mut ctx)?;
    ctx.skip_whitespace();
    if !ctx.at_end() {
        return Err(ctx.error(ErrorKind::TrailingInput));
    }
    Ok(value)
}

/// Decodes one value from the front of `input`, returning it together with
/// the number of bytes consumed.
///
/// Unlike [`decode`] this does not require the buffer to end after the
/// value, so a caller can carve successive values out of a larger buffer.
pub fn decode_partial<'de, C>(codec: &C, input: &'de [u8]) -> Result<(C::Value, usize), Error>
where
    C: Codec<'de>,
{
    let mut ctx = DecodeContext::new(input);
    ctx.skip_whitespace();
    let value = codec.decode(&mut ctx)?;
    Ok((value, ctx.offset()))
}

/// Decodes one value using the type's canonical codec.
pub fn decode_value<'de, T: DefaultCodec<'de>>(input: &'de [u8]) -> Result<T, Error> {
    decode(&T::default_codec(), input)
}
