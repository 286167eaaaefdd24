//! The codec protocol and the built-in primitive and combinator codecs.
//!
//! Codecs are immutable, cheaply cloneable values. Primitive codecs are
//! leaves; combinators hold inner codecs by value, so a codec forms a tree
//! mirroring the structure of the type it handles. All per-call mutable
//! state lives in the [`DecodeContext`] or [`Writer`] threaded through the
//! tree.

mod array;
mod boolean;
mod empty_as;
mod map;
mod null;
mod number;
mod object;
mod omit;
mod one_of;
mod option;
mod raw;
mod string;
mod transform;

use alloc::{boxed::Box, sync::Arc};

pub use array::{Array, array};
pub use boolean::{Boolean, boolean};
pub use empty_as::{EmptyAs, empty_as, empty_as_null, empty_as_omit};
pub use map::{MapCodec, map};
pub use null::{Null, null};
pub use number::{Number, number};
pub use object::{Object, object, object_with};
pub use omit::{Omit, omit};
pub use one_of::{OneOf, one_of};
pub use option::{OptionCodec, option, option_or_omit};
pub use raw::{Raw, RawOwned, RawRef, raw, raw_owned};
pub use string::{StringCodec, string};
pub use transform::{Transform, transform};

use crate::{context::DecodeContext, error::Error, writer::Writer};

/// A decode/encode strategy for one logical type.
///
/// The `'de` lifetime is the lifetime of the input span being decoded, in
/// the manner of serde's `Deserialize<'de>`; it lets codecs such as [`raw`]
/// hand out non-owning views into the input. Codecs whose values own their
/// data implement the trait for every `'de`.
///
/// Decoding must either consume a complete value, leaving the cursor just
/// past its final byte, or return an error positioned at the first offending
/// byte without any guarantee about the cursor (callers that want to retry
/// rewind with [`DecodeContext::seek`]). Encoding cannot fail: any value of
/// `Self::Value` has a JSON form.
pub trait Codec<'de> {
    /// The in-memory type this codec maps to and from JSON.
    type Value;

    /// Decodes one value starting at the cursor.
    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<Self::Value, Error>;

    /// Writes `value` to `writer`.
    fn encode(&self, value: &Self::Value, writer: &mut Writer);

    /// Whether `value` should be emitted at all when it appears as an
    /// object field.
    ///
    /// The default is to always emit; [`omit`] and [`empty_as`]-wrapped
    /// codecs override this to elide fields holding their default value.
    fn should_encode(&self, _value: &Self::Value) -> bool {
        true
    }
}

impl<'de, C: Codec<'de> + ?Sized> Codec<'de> for &C {
    type Value = C::Value;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<Self::Value, Error> {
        (**self).decode(ctx)
    }

    fn encode(&self, value: &Self::Value, writer: &mut Writer) {
        (**self).encode(value, writer);
    }

    fn should_encode(&self, value: &Self::Value) -> bool {
        (**self).should_encode(value)
    }
}

impl<'de, C: Codec<'de> + ?Sized> Codec<'de> for Box<C> {
    type Value = C::Value;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<Self::Value, Error> {
        (**self).decode(ctx)
    }

    fn encode(&self, value: &Self::Value, writer: &mut Writer) {
        (**self).encode(value, writer);
    }

    fn should_encode(&self, value: &Self::Value) -> bool {
        (**self).should_encode(value)
    }
}

impl<'de, C: Codec<'de> + ?Sized> Codec<'de> for Arc<C> {
    type Value = C::Value;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<Self::Value, Error> {
        (**self).decode(ctx)
    }

    fn encode(&self, value: &Self::Value, writer: &mut Writer) {
        (**self).encode(value, writer);
    }

    fn should_encode(&self, value: &Self::Value) -> bool {
        (**self).should_encode(value)
    }
}

/// A type-erased, shareable codec handle.
///
/// Useful when a single collection must hold codecs of different concrete
/// types, as in a heterogeneous [`one_of`].
pub type BoxCodec<'de, V> = Arc<dyn Codec<'de, Value = V> + Send + Sync + 'de>;

/// Erases a codec's concrete type behind a [`BoxCodec`] handle.
pub fn boxed<'de, C>(codec: C) -> BoxCodec<'de, C::Value>
where
    C: Codec<'de> + Send + Sync + 'de,
{
    Arc::new(codec)
}
