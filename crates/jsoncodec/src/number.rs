//! The JSON number grammar and conversions to and from Rust numeric types.
//!
//! Scanning recognizes the full grammar (optional minus, integer part with
//! no leading zero, optional fraction, optional exponent). Conversion is
//! exact for integer targets: overflow or a non-integral literal is
//! `NumberOutOfRange`. Formatting and parsing go through `core`, which never
//! consults locale state, so `.` is always the decimal separator.

use alloc::vec::Vec;

use crate::{
    context::DecodeContext,
    error::{Error, ErrorKind},
    scan,
};

/// One scanned numeric literal.
pub(crate) struct NumberSpan<'de> {
    pub text: &'de str,
    /// False when the literal has a fraction or exponent part.
    pub integral: bool,
}

/// Scans a numeric literal at the cursor, returning its source text.
pub(crate) fn scan_number<'de>(ctx: &mut DecodeContext<'de>) -> Result<NumberSpan<'de>, Error> {
    let start = ctx.offset();
    if ctx.peek() == Some(b'-') {
        ctx.advance(1);
    }
    match ctx.require_peek()? {
        b'0' => ctx.advance(1),
        b'1'..=b'9' => {
            ctx.advance(1);
            skip_digits(ctx);
        }
        _ => return Err(ctx.error(ErrorKind::UnexpectedToken("digit"))),
    }
    let mut integral = true;
    if ctx.peek() == Some(b'.') {
        integral = false;
        ctx.advance(1);
        expect_digit(ctx)?;
        skip_digits(ctx);
    }
    if matches!(ctx.peek(), Some(b'e' | b'E')) {
        integral = false;
        ctx.advance(1);
        if matches!(ctx.peek(), Some(b'+' | b'-')) {
            ctx.advance(1);
        }
        expect_digit(ctx)?;
        skip_digits(ctx);
    }
    let span = &ctx.input()[start..ctx.offset()];
    // The grammar above only admits ASCII bytes.
    let text = core::str::from_utf8(span)
        .map_err(|_| Error::new(ErrorKind::UnexpectedToken("number"), start))?;
    Ok(NumberSpan { text, integral })
}

fn skip_digits(ctx: &mut DecodeContext<'_>) {
    while let Some(c) = ctx.peek() {
        if !scan::is_digit(c) {
            break;
        }
        ctx.advance(1);
    }
}

fn expect_digit(ctx: &mut DecodeContext<'_>) -> Result<(), Error> {
    if scan::is_digit(ctx.require_peek()?) {
        ctx.advance(1);
        Ok(())
    } else {
        Err(ctx.error(ErrorKind::UnexpectedToken("digit")))
    }
}

/// Adapter so `core::fmt` output can be appended to a byte sink.
struct FmtBytes<'a>(&'a mut Vec<u8>);

impl core::fmt::Write for FmtBytes<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

fn push_display<T: core::fmt::Display>(out: &mut Vec<u8>, value: T) {
    use core::fmt::Write as _;
    // Writing into a Vec cannot fail.
    let _ = write!(FmtBytes(out), "{value}");
}

/// Numeric types that can be used with the number codec.
///
/// Sealed: implemented for the fixed-width signed and unsigned integers and
/// for `f32`/`f64`.
pub trait JsonNumber: private::Sealed + Copy {
    /// Decodes a numeric literal at the cursor into this type.
    #[doc(hidden)]
    fn decode_number(ctx: &mut DecodeContext<'_>) -> Result<Self, Error>;

    /// Appends the canonical textual form of `self` to `out`.
    #[doc(hidden)]
    fn encode_number(self, out: &mut Vec<u8>);
}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_json_integer {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl JsonNumber for $t {
            fn decode_number(ctx: &mut DecodeContext<'_>) -> Result<Self, Error> {
                let start = ctx.offset();
                let span = scan_number(ctx)?;
                if !span.integral {
                    return Err(Error::new(ErrorKind::NumberOutOfRange, start));
                }
                span.text
                    .parse::<$t>()
                    .map_err(|_| Error::new(ErrorKind::NumberOutOfRange, start))
            }

            fn encode_number(self, out: &mut Vec<u8>) {
                push_display(out, self);
            }
        }
    )*};
}

impl_json_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_json_float {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl JsonNumber for $t {
            fn decode_number(ctx: &mut DecodeContext<'_>) -> Result<Self, Error> {
                let start = ctx.offset();
                let span = scan_number(ctx)?;
                let value = span
                    .text
                    .parse::<$t>()
                    .map_err(|_| Error::new(ErrorKind::NumberOutOfRange, start))?;
                // Literals beyond the type's range parse to infinity.
                if !value.is_finite() {
                    return Err(Error::new(ErrorKind::NumberOutOfRange, start));
                }
                Ok(value)
            }

            fn encode_number(self, out: &mut Vec<u8>) {
                if self.is_finite() {
                    // `Display` for floats emits the shortest text that
                    // parses back to the same value.
                    push_display(out, self);
                } else {
                    // JSON has no NaN or infinity.
                    out.extend_from_slice(b"null");
                }
            }
        }
    )*};
}

impl_json_float!(f32, f64);
