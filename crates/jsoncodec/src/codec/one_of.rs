use alloc::vec::Vec;

use crate::{
    codec::Codec,
    context::DecodeContext,
    error::{Error, ErrorKind},
    writer::Writer,
};

/// Codec trying an ordered list of alternatives. See [`one_of`].
#[derive(Debug, Clone)]
pub struct OneOf<C> {
    alternatives: Vec<C>,
}

impl<'de, C: Codec<'de>> Codec<'de> for OneOf<C> {
    type Value = C::Value;

    fn decode(&self, ctx: &mut DecodeContext<'de>) -> Result<C::Value, Error> {
        let start = ctx.offset();
        let mut first_error = None;
        for alternative in &self.alternatives {
            ctx.seek(start);
            match alternative.decode(ctx) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        match first_error {
            // The first alternative's failure is the most diagnostic one.
            Some(e) => Err(e),
            None => Err(ctx.error(ErrorKind::UnexpectedToken("one of the alternatives"))),
        }
    }

    fn encode(&self, value: &C::Value, writer: &mut Writer) {
        self.alternatives[0].encode(value, writer);
    }

    fn should_encode(&self, value: &C::Value) -> bool {
        self.alternatives[0].should_encode(value)
    }
}

/// Codec that decodes with the first alternative that succeeds, rewinding
/// the cursor between attempts, and encodes with the first alternative.
///
/// Order the list by preference: the first entry is the canonical schema
/// used for encoding, and its error is the one reported when every
/// alternative fails. This ordering is a convention the caller upholds; it
/// is not validated at runtime. For alternatives of different concrete
/// codec types, erase them with [`boxed`](crate::codec::boxed) first.
///
/// # Panics
///
/// If `alternatives` is empty.
#[must_use]
pub fn one_of<C>(alternatives: Vec<C>) -> OneOf<C> {
    assert!(
        !alternatives.is_empty(),
        "one_of requires at least one alternative"
    );
    OneOf { alternatives }
}
