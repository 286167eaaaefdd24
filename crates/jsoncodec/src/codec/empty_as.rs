use crate::{
    codec::{Codec, Null, Omit, null, omit},
    context::DecodeContext,
    error::Error,
    writer::Writer,
};

/// Default-value wrapper codec. See [`empty_as`].
#[derive(Debug, Clone, Copy)]
pub struct EmptyAs<D, C, V> {
    default_codec: D,
    inner_codec: C,
    default_value: V,
}

impl<'de, D, C, V> Codec<'de> for EmptyAs<D, C, V>
where
    D: Codec<'de, Value = V>,
    C: Codec<'de, Value = V>,
    V: PartialEq,
{
    type Value = V;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<V, Error> {
        let start = ctx.offset();
        match self.inner_codec.decode(ctx) {
            Ok(value) => Ok(value),
            Err(inner_error) => {
                ctx.seek(start);
                match self.default_codec.decode(ctx) {
                    Ok(value) => Ok(value),
                    // The inner codec's error is more interesting than
                    // reporting that the value is not, say, a valid null.
                    Err(_) => Err(inner_error),
                }
            }
        }
    }

    fn encode(&self, value: &V, writer: &mut Writer) {
        if *value == self.default_value {
            self.default_codec.encode(value, writer);
        } else {
            self.inner_codec.encode(value, writer);
        }
    }

    fn should_encode(&self, value: &V) -> bool {
        if *value == self.default_value {
            self.default_codec.should_encode(value)
        } else {
            self.inner_codec.should_encode(value)
        }
    }
}

/// Codec that decodes with `inner_codec`, falling back to `default_codec`
/// (with the cursor rewound) when it fails, and encodes values equal to the
/// default through `default_codec`.
///
/// This is how optional, nullable and default-eliding fields are expressed
/// compositionally; see the [`empty_as_null`] and [`empty_as_omit`]
/// shorthands. If both codecs fail to decode, the inner codec's error is
/// surfaced.
#[must_use]
pub fn empty_as<'de, D, C>(default_codec: D, inner_codec: C) -> EmptyAs<D, C, C::Value>
where
    D: Codec<'de, Value = C::Value>,
    C: Codec<'de>,
    C::Value: Default,
{
    EmptyAs {
        default_codec,
        inner_codec,
        default_value: C::Value::default(),
    }
}

/// Wraps `inner_codec` so that `null` decodes to the default value and the
/// default value encodes as `null`.
#[must_use]
pub fn empty_as_null<'de, C>(inner_codec: C) -> EmptyAs<Null<C::Value>, C, C::Value>
where
    C: Codec<'de>,
    C::Value: Default,
{
    empty_as(null(), inner_codec)
}

/// Wraps `inner_codec` so that an absent object field decodes to the
/// default value and the default value is omitted entirely on encode.
#[must_use]
pub fn empty_as_omit<'de, C>(inner_codec: C) -> EmptyAs<Omit<C::Value>, C, C::Value>
where
    C: Codec<'de>,
    C::Value: Default,
{
    empty_as(omit(), inner_codec)
}
