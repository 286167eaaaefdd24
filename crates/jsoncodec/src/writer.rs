//! The append-only encode sink.

use alloc::vec::Vec;

use crate::{escape, number::JsonNumber};

/// An append-only JSON writer that keeps its own punctuation valid.
///
/// A single separator flag tracks whether a `,` must be emitted before the
/// next value. The flag is false exactly at the start of an array or object
/// scope and right after a key, and true after any value was written in the
/// current scope, so sibling values are always comma-separated and nothing
/// else is. Output is compact: no insignificant whitespace.
///
/// Array and object scopes are normally entered through [`in_array`] /
/// [`in_object`], which guarantee the closing token; the explicit
/// [`begin_array`]/[`end_array`] pairs exist for encoders that cannot
/// express their body as a closure.
///
/// [`in_array`]: Writer::in_array
/// [`in_object`]: Writer::in_object
/// [`begin_array`]: Writer::begin_array
/// [`end_array`]: Writer::end_array
#[derive(Debug, Default)]
pub struct Writer {
    out: Vec<u8>,
    needs_separator: bool,
}

impl Writer {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with a pre-allocated output buffer.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            needs_separator: false,
        }
    }

    /// The bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Consumes the writer, returning the output buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    fn separator_and_set(&mut self) -> &mut Vec<u8> {
        if self.needs_separator {
            self.out.push(b',');
        }
        self.needs_separator = true;
        &mut self.out
    }

    fn separator_and_clear(&mut self) -> &mut Vec<u8> {
        if self.needs_separator {
            self.out.push(b',');
        }
        self.needs_separator = false;
        &mut self.out
    }

    /// Writes the literal `null`.
    pub fn write_null(&mut self) {
        self.separator_and_set().extend_from_slice(b"null");
    }

    /// Writes `true` or `false`.
    pub fn write_bool(&mut self, value: bool) {
        self.separator_and_set()
            .extend_from_slice(if value { &b"true"[..] } else { &b"false"[..] });
    }

    /// Writes a numeric literal in its canonical, locale-independent form.
    pub fn write_number<N: JsonNumber>(&mut self, value: N) {
        let out = self.separator_and_set();
        value.encode_number(out);
    }

    /// Writes a quoted, escaped string literal.
    pub fn write_string(&mut self, value: &str) {
        let out = self.separator_and_set();
        out.push(b'"');
        escape::write_escaped(out, value);
        out.push(b'"');
    }

    /// Copies pre-formed JSON verbatim into the output, with separator
    /// handling as for any other value.
    pub fn write_raw(&mut self, json: &[u8]) {
        self.separator_and_set().extend_from_slice(json);
    }

    /// Writes a pre-escaped key followed by `:` and suppresses the
    /// separator for the value that follows.
    pub fn write_key(&mut self, key: &Key) {
        let out = self.separator_and_clear();
        out.extend_from_slice(key.as_bytes());
        out.push(b':');
    }

    /// Escapes and writes `name` as a key followed by `:`.
    ///
    /// Like [`write_key`](Writer::write_key) but for keys that are not known
    /// at codec construction time.
    pub fn write_key_str(&mut self, name: &str) {
        let out = self.separator_and_clear();
        out.push(b'"');
        escape::write_escaped(out, name);
        out.push(b'"');
        out.push(b':');
    }

    /// Opens an array scope. Must be balanced with [`end_array`].
    ///
    /// [`end_array`]: Writer::end_array
    pub fn begin_array(&mut self) {
        self.separator_and_clear().push(b'[');
    }

    /// Closes an array scope.
    pub fn end_array(&mut self) {
        self.out.push(b']');
        self.needs_separator = true;
    }

    /// Opens an object scope. Must be balanced with [`end_object`].
    ///
    /// [`end_object`]: Writer::end_object
    pub fn begin_object(&mut self) {
        self.separator_and_clear().push(b'{');
    }

    /// Closes an object scope.
    pub fn end_object(&mut self) {
        self.out.push(b'}');
        self.needs_separator = true;
    }

    /// Writes `[`, runs `body`, then writes `]`.
    pub fn in_array<F: FnOnce(&mut Writer)>(&mut self, body: F) {
        self.begin_array();
        body(self);
        self.end_array();
    }

    /// Writes `{`, runs `body`, then writes `}`.
    pub fn in_object<F: FnOnce(&mut Writer)>(&mut self, body: F) {
        self.begin_object();
        body(self);
        self.end_object();
    }
}

/// An object key escaped and quoted once, at codec construction time, so
/// encoding an object never re-escapes its field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    escaped: Vec<u8>,
}

impl Key {
    /// Escapes and quotes `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut escaped = Vec::with_capacity(name.len() + 2);
        escaped.push(b'"');
        escape::write_escaped(&mut escaped, name);
        escaped.push(b'"');
        Self { escaped }
    }

    /// The quoted, escaped key text.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.escaped
    }
}
