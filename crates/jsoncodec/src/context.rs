use crate::{
    error::{Error, ErrorKind},
    scan,
};

/// The state threaded through one decode call: the immutable input span and
/// the cursor.
///
/// Every decode operation either advances the cursor past the bytes it
/// consumed or returns an [`Error`] pinpointing the offset at which it gave
/// up. The only callers that rewind the cursor (via [`seek`]) are the
/// recoverable combinators (`one_of`, `empty_as`), which retry an
/// alternative codec from the position where the failed attempt started.
///
/// [`seek`]: DecodeContext::seek
#[derive(Debug)]
pub struct DecodeContext<'de> {
    input: &'de [u8],
    pos: usize,
}

impl<'de> DecodeContext<'de> {
    /// Creates a context reading from the start of `input`.
    #[must_use]
    pub fn new(input: &'de [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// The full input span this context reads from.
    #[must_use]
    pub fn input(&self) -> &'de [u8] {
        self.input
    }

    /// Current byte offset of the cursor.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Whether the cursor has reached the end of the input.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The byte at the cursor, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// The byte at the cursor, failing with `UnexpectedEnd` if the input is
    /// exhausted.
    pub fn require_peek(&self) -> Result<u8, Error> {
        self.peek()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedEnd))
    }

    /// Moves the cursor forward by `n` bytes.
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Rewinds (or forwards) the cursor to an absolute offset.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    /// Consumes `byte` or fails with `UnexpectedToken`.
    pub fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), Error> {
        if self.require_peek()? == byte {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(ErrorKind::UnexpectedToken(expected)))
        }
    }

    /// Consumes the exact byte sequence `literal` or fails.
    ///
    /// Running out of input while a prefix still matches is reported as
    /// `UnexpectedEnd`; a mismatching byte as `UnexpectedToken`.
    pub fn expect_literal(
        &mut self,
        literal: &'static [u8],
        expected: &'static str,
    ) -> Result<(), Error> {
        let rest = &self.input[self.pos..];
        if rest.starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else if rest.len() < literal.len() && literal.starts_with(rest) {
            Err(Error::new(ErrorKind::UnexpectedEnd, self.input.len()))
        } else {
            Err(self.error(ErrorKind::UnexpectedToken(expected)))
        }
    }

    /// Advances past JSON whitespace (space, tab, newline, carriage return).
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !scan::is_space(c) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Builds an error at the current cursor position.
    #[must_use]
    pub fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.pos)
    }
}
