use alloc::{collections::BTreeMap, string::String};

use crate::{codec::Codec, context::DecodeContext, error::Error, escape, scan, writer::Writer};

/// Codec for string-keyed maps. See [`map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapCodec<C> {
    inner: C,
}

impl<'de, C: Codec<'de>> Codec<'de> for MapCodec<C> {
    type Value = BTreeMap<String, C::Value>;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<Self::Value, Error> {
        let mut output = BTreeMap::new();
        scan::decode_comma_separated(ctx, b'{', b'}', "'{'", "',' or '}'", |ctx| {
            let key = escape::decode_string(ctx)?;
            ctx.skip_whitespace();
            ctx.expect(b':', "':'")?;
            ctx.skip_whitespace();
            let value = self.inner.decode(ctx)?;
            output.insert(key, value);
            Ok(())
        })?;
        Ok(output)
    }

    fn encode(&self, value: &Self::Value, writer: &mut Writer) {
        writer.in_object(|w| {
            for (key, entry) in value {
                w.write_key_str(key);
                self.inner.encode(entry, w);
            }
        });
    }
}

/// Codec mapping a JSON object with arbitrary keys to a
/// `BTreeMap<String, V>`, all values decoded with `inner`.
///
/// A duplicate key in the input overwrites the earlier entry (last wins,
/// matching map insertion). Encoding emits entries in key order.
#[must_use]
pub fn map<C>(inner: C) -> MapCodec<C> {
    MapCodec { inner }
}
