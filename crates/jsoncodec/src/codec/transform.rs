use core::marker::PhantomData;

use crate::{
    codec::Codec,
    context::DecodeContext,
    error::{Error, ErrorKind},
    writer::Writer,
};

/// Conversion wrapper codec. See [`transform`].
#[derive(Debug, Clone, Copy)]
pub struct Transform<T, C, P, B> {
    inner: C,
    project: P,
    build: B,
    _marker: PhantomData<fn() -> T>,
}

impl<'de, T, C, P, B> Codec<'de> for Transform<T, C, P, B>
where
    C: Codec<'de>,
    P: Fn(&T) -> C::Value,
    B: Fn(C::Value) -> Result<T, ErrorKind>,
{
    type Value = T;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<T, Error> {
        let start = ctx.offset();
        let raw = self.inner.decode(ctx)?;
        (self.build)(raw).map_err(|kind| Error::new(kind, start))
    }

    fn encode(&self, value: &T, writer: &mut Writer) {
        self.inner.encode(&(self.project)(value), writer);
    }

    fn should_encode(&self, value: &T) -> bool {
        self.inner.should_encode(&(self.project)(value))
    }
}

/// Codec adapting `inner` to a different in-memory type with a conversion
/// pair: `project` maps the value to the inner codec's type for encoding,
/// `build` constructs the value from a decoded inner value and may reject
/// it with an [`ErrorKind`] (reported at the value's start offset).
///
/// ```
/// use jsoncodec::{ErrorKind, codec, decode, encode};
///
/// #[derive(Debug, PartialEq)]
/// enum Mode {
///     Off,
///     On,
/// }
///
/// let mode = codec::transform(
///     codec::number::<u8>(),
///     |m: &Mode| match m {
///         Mode::Off => 0,
///         Mode::On => 1,
///     },
///     |n| match n {
///         0 => Ok(Mode::Off),
///         1 => Ok(Mode::On),
///         _ => Err(ErrorKind::NumberOutOfRange),
///     },
/// );
///
/// assert_eq!(decode(&mode, b"1")?, Mode::On);
/// assert_eq!(encode(&mode, &Mode::Off), b"0");
/// # Ok::<(), jsoncodec::Error>(())
/// ```
#[must_use]
pub fn transform<'de, T, C, P, B>(inner: C, project: P, build: B) -> Transform<T, C, P, B>
where
    C: Codec<'de>,
    P: Fn(&T) -> C::Value,
    B: Fn(C::Value) -> Result<T, ErrorKind>,
{
    Transform {
        inner,
        project,
        build,
        _marker: PhantomData,
    }
}
