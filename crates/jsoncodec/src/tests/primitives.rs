use crate::{
    Error, ErrorKind,
    codec::{self, Codec},
    decode, encode,
};

#[test]
fn boolean_literals() {
    let c = codec::boolean();
    assert_eq!(decode(&c, b"true"), Ok(true));
    assert_eq!(decode(&c, b"  false  "), Ok(false));
    assert_eq!(encode(&c, &true), b"true");
    assert_eq!(encode(&c, &false), b"false");
}

#[test]
fn boolean_rejects_other_tokens() {
    let c = codec::boolean();
    assert_eq!(
        decode(&c, b"1").unwrap_err().kind(),
        &ErrorKind::UnexpectedToken("boolean")
    );
    assert_eq!(
        decode(&c, b"truth").unwrap_err().kind(),
        &ErrorKind::UnexpectedToken("'true'")
    );
    // A matching prefix cut short is an end-of-input error, not a token
    // error.
    assert_eq!(decode(&c, b"tru").unwrap_err().kind(), &ErrorKind::UnexpectedEnd);
}

#[test]
fn null_decodes_to_the_default() {
    let c = codec::null::<u32>();
    assert_eq!(decode(&c, b"null"), Ok(0));
    assert_eq!(encode(&c, &7), b"null");
    assert!(decode(&c, b"0").is_err());
}

#[test]
fn omit_never_decodes_and_writes_nothing() {
    let c = codec::omit::<u32>();
    assert!(!c.should_encode(&0));
    assert_eq!(encode(&c, &7), b"");
    assert!(decode(&c, b"7").is_err());
}

#[test]
fn option_maps_null_to_none() {
    let c = codec::option(codec::number::<i32>());
    assert_eq!(decode(&c, b"null"), Ok(None));
    assert_eq!(decode(&c, b"42"), Ok(Some(42)));
    assert_eq!(encode(&c, &None), b"null");
    assert_eq!(encode(&c, &Some(42)), b"42");
}

#[test]
fn option_or_omit_suppresses_none() {
    let c = codec::option_or_omit(codec::boolean());
    assert!(!c.should_encode(&None));
    assert!(c.should_encode(&Some(false)));
}

#[test]
fn transform_validates_while_building() {
    let c = codec::transform(
        codec::number::<u8>(),
        |b: &bool| u8::from(*b),
        |n| match n {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(ErrorKind::NumberOutOfRange),
        },
    );
    assert_eq!(decode(&c, b"1"), Ok(true));
    assert_eq!(decode(&c, b"0"), Ok(false));
    assert_eq!(encode(&c, &false), b"0");

    // Rejection is reported at the start of the offending value.
    let err = decode(&c, b" 9").unwrap_err();
    assert_eq!(err, Error::new(ErrorKind::NumberOutOfRange, 1));
}
