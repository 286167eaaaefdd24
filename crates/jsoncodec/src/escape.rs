//! String escaping and unescaping per RFC 8259 section 7.
//!
//! The encode side escapes `"` and `\`, uses the short forms for the popular
//! control characters and `\u00XX` for the rest. `/` is left unescaped (the
//! grammar permits either form; the compact one is preferred). The decode
//! side accepts every standard escape including `\uXXXX` surrogate pairs,
//! and rejects unescaped control bytes and invalid UTF-8.

use alloc::{string::String, vec::Vec};

use crate::{
    context::DecodeContext,
    error::{Error, ErrorKind},
    scan,
};

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Appends `text` to `out` with JSON escaping applied.
///
/// Multi-byte UTF-8 sequences pass through unchanged; only ASCII bytes ever
/// need escaping, so this can run byte-wise.
pub(crate) fn write_escaped(out: &mut Vec<u8>, text: &str) {
    for &c in text.as_bytes() {
        match c {
            b'"' | b'\\' => {
                out.push(b'\\');
                out.push(c);
            }
            0x08 => out.extend_from_slice(b"\\b"),
            0x09 => out.extend_from_slice(b"\\t"),
            0x0A => out.extend_from_slice(b"\\n"),
            0x0C => out.extend_from_slice(b"\\f"),
            0x0D => out.extend_from_slice(b"\\r"),
            c if c < 0x20 => {
                out.extend_from_slice(b"\\u00");
                out.push(HEX[usize::from(c >> 4)]);
                out.push(HEX[usize::from(c & 0x0F)]);
            }
            c => out.push(c),
        }
    }
}

/// Decodes a complete string literal into an owned, unescaped `String`.
pub(crate) fn decode_string(ctx: &mut DecodeContext<'_>) -> Result<String, Error> {
    ctx.expect(b'"', "string")?;
    let mut out = String::new();
    loop {
        // Copy the maximal run of bytes that need no processing. UTF-8
        // continuation and lead bytes are all >= 0x80 and so never collide
        // with the delimiters checked here.
        let run_start = ctx.offset();
        let bytes = &ctx.input()[run_start..];
        let mut len = 0;
        while len < bytes.len() {
            let c = bytes[len];
            if c == b'"' || c == b'\\' || c < 0x20 {
                break;
            }
            len += 1;
        }
        if len > 0 {
            let run = &bytes[..len];
            let text = core::str::from_utf8(run).map_err(|e| {
                let at = run_start + e.valid_up_to();
                Error::new(ErrorKind::InvalidUnicode(u32::from(run[e.valid_up_to()])), at)
            })?;
            out.push_str(text);
            ctx.advance(len);
        }
        match ctx.require_peek()? {
            b'"' => {
                ctx.advance(1);
                return Ok(out);
            }
            b'\\' => {
                ctx.advance(1);
                decode_escape(ctx, &mut out)?;
            }
            // An unescaped control character.
            _ => return Err(ctx.error(ErrorKind::UnexpectedToken("string character"))),
        }
    }
}

/// Decodes one escape sequence, cursor positioned after the backslash.
fn decode_escape(ctx: &mut DecodeContext<'_>, out: &mut String) -> Result<(), Error> {
    let c = ctx.require_peek()?;
    ctx.advance(1);
    let unescaped = match c {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\u{0008}',
        b'f' => '\u{000C}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => return decode_unicode_escape(ctx, out),
        other => {
            return Err(Error::new(
                ErrorKind::InvalidEscape(other as char),
                ctx.offset() - 1,
            ));
        }
    };
    out.push(unescaped);
    Ok(())
}

/// Decodes `XXXX` (and a trailing low surrogate if needed), cursor
/// positioned after `\u`.
fn decode_unicode_escape(ctx: &mut DecodeContext<'_>, out: &mut String) -> Result<(), Error> {
    let unit_start = ctx.offset();
    let high = read_hex4(ctx)?;
    let scalar = match high {
        0xD800..=0xDBFF => {
            ctx.expect(b'\\', "low surrogate escape")
                .and_then(|()| ctx.expect(b'u', "low surrogate escape"))
                .map_err(|_| Error::new(ErrorKind::InvalidUnicode(high), unit_start))?;
            let low = read_hex4(ctx)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(Error::new(ErrorKind::InvalidUnicode(low), unit_start));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        }
        // A low surrogate with no preceding high surrogate.
        0xDC00..=0xDFFF => {
            return Err(Error::new(ErrorKind::InvalidUnicode(high), unit_start));
        }
        _ => high,
    };
    let c = char::from_u32(scalar)
        .ok_or_else(|| Error::new(ErrorKind::InvalidUnicode(scalar), unit_start))?;
    out.push(c);
    Ok(())
}

fn read_hex4(ctx: &mut DecodeContext<'_>) -> Result<u32, Error> {
    let mut value = 0u32;
    for _ in 0..4 {
        let c = ctx.require_peek()?;
        let digit = scan::hex_value(c)
            .ok_or_else(|| ctx.error(ErrorKind::InvalidEscape(c as char)))?;
        value = (value << 4) | digit;
        ctx.advance(1);
    }
    Ok(value)
}
