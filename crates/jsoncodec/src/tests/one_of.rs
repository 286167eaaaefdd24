use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use crate::{ErrorKind, codec, decode, encode};

#[derive(Debug, Default, Clone, PartialEq)]
struct Shape {
    kind: String,
}

fn shape_alternatives<'de>() -> codec::OneOf<codec::Object<'de, Shape>> {
    let by_kind = codec::object::<Shape>().required(
        "kind",
        codec::string(),
        |s: &Shape| &s.kind,
        |s, v| s.kind = v,
    );
    let by_type = codec::object::<Shape>().required(
        "type",
        codec::string(),
        |s: &Shape| &s.kind,
        |s, v| s.kind = v,
    );
    codec::one_of(vec![by_kind, by_type])
}

#[test]
fn first_matching_alternative_wins() {
    let c = shape_alternatives();
    assert_eq!(decode(&c, br#"{"kind":"circle"}"#).unwrap().kind, "circle");
    // The cursor rewinds between attempts, so the second alternative sees
    // the whole value even after the first consumed part of it.
    assert_eq!(decode(&c, br#"{"type":"square"}"#).unwrap().kind, "square");
}

#[test]
fn prefers_the_first_alternative_when_both_match() {
    // Unknown keys are skipped, so this input satisfies both alternatives;
    // the first one registered decides.
    let c = shape_alternatives();
    let got = decode(&c, br#"{"kind":"circle","type":"square"}"#).unwrap();
    assert_eq!(got.kind, "circle");

    // Same with alternatives whose outputs differ for the same input.
    let plain = codec::boxed(codec::number::<u8>());
    let doubled = codec::boxed(codec::transform(
        codec::number::<u8>(),
        |v: &u8| *v,
        |n| Ok(n * 2),
    ));
    let c = codec::one_of(vec![plain, doubled]);
    assert_eq!(decode(&c, b"3"), Ok(3));
}

#[test]
fn encodes_with_the_first_alternative() {
    let v = Shape {
        kind: "circle".to_string(),
    };
    assert_eq!(encode(&shape_alternatives(), &v), br#"{"kind":"circle"}"#);
}

#[test]
fn reports_the_first_alternatives_error() {
    let err = decode(&shape_alternatives(), b"{}").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingRequiredField("kind".to_string()));
}

#[test]
fn heterogeneous_alternatives_via_boxed() {
    let c = codec::one_of(vec![
        codec::boxed(codec::string()),
        codec::boxed(codec::null::<String>()),
    ]);
    assert_eq!(decode(&c, br#""s""#), Ok("s".to_string()));
    assert_eq!(decode(&c, b"null"), Ok(String::new()));
    assert_eq!(encode(&c, &"s".to_string()), br#""s""#);
}

#[test]
#[should_panic(expected = "at least one alternative")]
fn empty_alternative_list_panics() {
    let _ = codec::one_of(Vec::<codec::Boolean>::new());
}
