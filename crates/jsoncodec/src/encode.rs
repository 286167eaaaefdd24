//! Top-level encode entry points.

use alloc::vec::Vec;

use crate::{codec::Codec, standard::DefaultCodec, writer::Writer};

/// Encodes `value` to compact JSON text.
///
/// Encoding always succeeds for well-formed codecs and acyclic values.
pub fn encode<'de, C>(codec: &C, value: &C::Value) -> Vec<u8>
where
    C: Codec<'de>,
{
    let mut writer = Writer::new();
    codec.encode(value, &mut writer);
    writer.into_bytes()
}

/// Encodes `value` using the type's canonical codec.
pub fn encode_value<'de, T: DefaultCodec<'de>>(value: &T) -> Vec<u8> {
    encode(&T::default_codec(), value)
}
