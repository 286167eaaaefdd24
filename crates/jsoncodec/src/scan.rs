//! Character classes and structural scanning over the raw input.
//!
//! These helpers implement the parts of the JSON grammar that are shared by
//! several codecs: skipping a complete value without interpreting it, and
//! the `open → value (, value)* → close` loop that arrays, objects and maps
//! all drive.

use alloc::vec::Vec;

use crate::{
    context::DecodeContext,
    error::{Error, ErrorKind},
    number,
};

#[inline]
pub(crate) fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
pub(crate) fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub(crate) fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub(crate) fn hex_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'f' => Some(u32::from(c - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}

/// Skips a complete string literal, validating escape shapes but not
/// building the unescaped text.
pub(crate) fn skip_string(ctx: &mut DecodeContext<'_>) -> Result<(), Error> {
    ctx.expect(b'"', "string")?;
    loop {
        match ctx.require_peek()? {
            b'"' => {
                ctx.advance(1);
                return Ok(());
            }
            b'\\' => {
                ctx.advance(1);
                let escape = ctx.require_peek()?;
                match escape {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => ctx.advance(1),
                    b'u' => {
                        ctx.advance(1);
                        for _ in 0..4 {
                            let c = ctx.require_peek()?;
                            if !is_hex_digit(c) {
                                return Err(ctx.error(ErrorKind::InvalidEscape(c as char)));
                            }
                            ctx.advance(1);
                        }
                    }
                    other => {
                        return Err(ctx.error(ErrorKind::InvalidEscape(other as char)));
                    }
                }
            }
            c if c < 0x20 => {
                return Err(ctx.error(ErrorKind::UnexpectedToken("string character")));
            }
            _ => ctx.advance(1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Array,
    Object,
}

/// Advances past the next complete JSON value without interpreting it.
///
/// Containers are tracked with an explicit frame stack rather than call
/// recursion, so the auxiliary memory is O(depth) and inputs nested hundreds
/// of thousands of levels deep cannot exhaust the call stack.
pub(crate) fn skip_value(ctx: &mut DecodeContext<'_>) -> Result<(), Error> {
    let mut stack: Vec<Frame> = Vec::new();
    'value: loop {
        ctx.skip_whitespace();
        match ctx.require_peek()? {
            b'[' => {
                ctx.advance(1);
                ctx.skip_whitespace();
                if ctx.peek() == Some(b']') {
                    ctx.advance(1);
                } else {
                    stack.push(Frame::Array);
                    continue 'value;
                }
            }
            b'{' => {
                ctx.advance(1);
                ctx.skip_whitespace();
                if ctx.peek() == Some(b'}') {
                    ctx.advance(1);
                } else {
                    stack.push(Frame::Object);
                    skip_string(ctx)?;
                    ctx.skip_whitespace();
                    ctx.expect(b':', "':'")?;
                    continue 'value;
                }
            }
            b'"' => skip_string(ctx)?,
            b't' => ctx.expect_literal(b"true", "'true'")?,
            b'f' => ctx.expect_literal(b"false", "'false'")?,
            b'n' => ctx.expect_literal(b"null", "'null'")?,
            b'-' | b'0'..=b'9' => {
                number::scan_number(ctx)?;
            }
            _ => return Err(ctx.error(ErrorKind::UnexpectedToken("a JSON value"))),
        }

        // A value just ended; unwind closing brackets and separators until
        // another value is expected or the outermost value is complete.
        loop {
            let Some(&frame) = stack.last() else {
                return Ok(());
            };
            ctx.skip_whitespace();
            match (frame, ctx.require_peek()?) {
                (_, b',') => {
                    ctx.advance(1);
                    if matches!(frame, Frame::Object) {
                        ctx.skip_whitespace();
                        skip_string(ctx)?;
                        ctx.skip_whitespace();
                        ctx.expect(b':', "':'")?;
                    }
                    continue 'value;
                }
                (Frame::Array, b']') | (Frame::Object, b'}') => {
                    ctx.advance(1);
                    stack.pop();
                }
                (Frame::Array, _) => {
                    return Err(ctx.error(ErrorKind::UnexpectedToken("',' or ']'")));
                }
                (Frame::Object, _) => {
                    return Err(ctx.error(ErrorKind::UnexpectedToken("',' or '}'")));
                }
            }
        }
    }
}

/// The shared container decode loop: consumes `open`, then alternates
/// between `element` and a `,` separator until `close`.
///
/// `element` is invoked with the cursor on the first non-whitespace byte of
/// each element. An empty container (`open` immediately followed by `close`)
/// is valid and invokes `element` zero times.
pub(crate) fn decode_comma_separated<'de, F>(
    ctx: &mut DecodeContext<'de>,
    open: u8,
    close: u8,
    expected_open: &'static str,
    expected_next: &'static str,
    mut element: F,
) -> Result<(), Error>
where
    F: FnMut(&mut DecodeContext<'de>) -> Result<(), Error>,
{
    ctx.expect(open, expected_open)?;
    ctx.skip_whitespace();
    if ctx.peek() == Some(close) {
        ctx.advance(1);
        return Ok(());
    }
    loop {
        element(ctx)?;
        ctx.skip_whitespace();
        match ctx.require_peek()? {
            b',' => {
                ctx.advance(1);
                ctx.skip_whitespace();
            }
            c if c == close => {
                ctx.advance(1);
                return Ok(());
            }
            _ => return Err(ctx.error(ErrorKind::UnexpectedToken(expected_next))),
        }
    }
}
