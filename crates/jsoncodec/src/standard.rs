//! Canonical codecs for common types.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::codec::{
    Array, Boolean, Codec, MapCodec, Number, OptionCodec, Raw, RawRef, StringCodec, array,
    boolean, map, number, option, raw, string,
};

/// Types with a canonical codec.
///
/// Lets containers of plain values be coded without spelling the codec tree
/// out, and powers the value-only entry points
/// [`decode_value`](crate::decode_value) and
/// [`encode_value`](crate::encode_value).
pub trait DefaultCodec<'de>: Sized {
    /// The canonical codec type for `Self`.
    type Codec: Codec<'de, Value = Self>;

    /// Builds the canonical codec.
    fn default_codec() -> Self::Codec;
}

/// Builds the canonical codec for `T`.
///
/// ```
/// use jsoncodec::{decode, default_codec};
///
/// let numbers = default_codec::<Vec<u64>>();
/// assert_eq!(decode(&numbers, b"[1,2]")?, vec![1, 2]);
/// # Ok::<(), jsoncodec::Error>(())
/// ```
#[must_use]
pub fn default_codec<'de, T: DefaultCodec<'de>>() -> T::Codec {
    T::default_codec()
}

impl<'de> DefaultCodec<'de> for bool {
    type Codec = Boolean;

    fn default_codec() -> Boolean {
        boolean()
    }
}

macro_rules! impl_default_codec_number {
    ($($t:ty),* $(,)?) => {$(
        impl<'de> DefaultCodec<'de> for $t {
            type Codec = Number<$t>;

            fn default_codec() -> Number<$t> {
                number()
            }
        }
    )*};
}

impl_default_codec_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<'de> DefaultCodec<'de> for String {
    type Codec = StringCodec;

    fn default_codec() -> StringCodec {
        string()
    }
}

impl<'de> DefaultCodec<'de> for RawRef<'de> {
    type Codec = Raw;

    fn default_codec() -> Raw {
        raw()
    }
}

impl<'de, T: DefaultCodec<'de>> DefaultCodec<'de> for Vec<T> {
    type Codec = Array<Vec<T>, T::Codec>;

    fn default_codec() -> Self::Codec {
        array(T::default_codec())
    }
}

impl<'de, T: DefaultCodec<'de>> DefaultCodec<'de> for Option<T> {
    type Codec = OptionCodec<T::Codec>;

    fn default_codec() -> Self::Codec {
        option(T::default_codec())
    }
}

impl<'de, V: DefaultCodec<'de>> DefaultCodec<'de> for BTreeMap<String, V> {
    type Codec = MapCodec<V::Codec>;

    fn default_codec() -> Self::Codec {
        map(V::default_codec())
    }
}
