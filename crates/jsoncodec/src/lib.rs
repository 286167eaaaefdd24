//! Composable JSON codecs.
//!
//! A [`Codec`] is a small immutable value describing how one in-memory type
//! maps to and from JSON text. Primitive codecs ([`codec::boolean`],
//! [`codec::number`], [`codec::string`], [`codec::null`]) are leaves;
//! combinator codecs ([`codec::array`], [`codec::object`], [`codec::one_of`],
//! [`codec::empty_as`], [`codec::raw`]) compose inner codecs into decoders
//! and encoders for containers, record types, discriminated alternatives and
//! default-eliding fields. No runtime reflection, no schema files: the codec
//! tree is built once and then drives both directions.
//!
//! ```
//! use jsoncodec::{codec, decode, encode};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point = codec::object::<Point>()
//!     .required("x", codec::number::<i32>(), |p| &p.x, |p, v| p.x = v)
//!     .required("y", codec::number::<i32>(), |p| &p.y, |p, v| p.y = v);
//!
//! let decoded = decode(&point, br#" {"y":2,"x":1} "#)?;
//! assert_eq!(decoded, Point { x: 1, y: 2 });
//! assert_eq!(encode(&point, &decoded), br#"{"x":1,"y":2}"#);
//! # Ok::<(), jsoncodec::Error>(())
//! ```
//!
//! Decoding is a single synchronous pass over an in-memory byte span; all
//! mutable state lives in a per-call [`DecodeContext`]. Encoding appends to a
//! per-call [`Writer`] that tracks separator state so the output punctuation
//! is always balanced. Codecs themselves are stateless with respect to any
//! one call and can be shared read-only across threads.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod context;
mod decode;
mod encode;
mod error;
mod escape;
mod number;
mod scan;
mod standard;
mod writer;

pub mod codec;

#[cfg(test)]
mod tests;

pub use codec::{BoxCodec, Codec, RawRef, boxed};
pub use context::DecodeContext;
pub use decode::{decode, decode_partial, decode_value};
pub use encode::{encode, encode_value};
pub use error::{Error, ErrorKind};
pub use number::JsonNumber;
pub use standard::{DefaultCodec, default_codec};
pub use writer::{Key, Writer};
