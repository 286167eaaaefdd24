use core::marker::PhantomData;

use crate::{codec::Codec, context::DecodeContext, error::Error, scan, writer::Writer};

/// Codec for ordered or set-like containers. See [`array`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array<T, C> {
    inner: C,
    _marker: PhantomData<fn() -> T>,
}

impl<'de, T, C> Codec<'de> for Array<T, C>
where
    C: Codec<'de>,
    T: Default + Extend<C::Value>,
    for<'a> &'a T: IntoIterator<Item = &'a C::Value>,
{
    type Value = T;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<T, Error> {
        let mut output = T::default();
        scan::decode_comma_separated(ctx, b'[', b']', "'['", "',' or ']'", |ctx| {
            let element = self.inner.decode(ctx)?;
            output.extend(core::iter::once(element));
            Ok(())
        })?;
        Ok(output)
    }

    fn encode(&self, value: &T, writer: &mut Writer) {
        writer.in_array(|w| {
            for element in value {
                self.inner.encode(element, w);
            }
        });
    }
}

/// Codec mapping a JSON array to any container that can be built by
/// extension and iterated by reference: `Vec`, `VecDeque`, `BTreeSet`,
/// `LinkedList`, ...
///
/// `[]` decodes to an empty container. Element order is the container's
/// iteration order on encode and insertion order on decode.
///
/// ```
/// use jsoncodec::{codec, decode};
///
/// let numbers = codec::array::<Vec<u32>, _>(codec::number());
/// assert_eq!(decode(&numbers, b"[1,2,3]")?, vec![1, 2, 3]);
/// # Ok::<(), jsoncodec::Error>(())
/// ```
#[must_use]
pub fn array<T, C>(inner: C) -> Array<T, C> {
    Array {
        inner,
        _marker: PhantomData,
    }
}
