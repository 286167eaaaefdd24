use crate::writer::{Key, Writer};

#[test]
fn separates_siblings_only() {
    let mut w = Writer::new();
    w.in_array(|w| {
        w.write_number(1u32);
        w.write_string("two");
        w.in_object(|w| {
            w.write_key_str("a");
            w.write_bool(true);
            w.write_key_str("b");
            w.write_null();
        });
        w.in_array(|_| {});
    });
    assert_eq!(w.as_bytes(), br#"[1,"two",{"a":true,"b":null},[]]"#);
}

#[test]
fn keys_are_escaped_once_at_construction() {
    let key = Key::new("a\"b");
    assert_eq!(key.as_bytes(), br#""a\"b""#);

    let mut w = Writer::new();
    w.in_object(|w| {
        w.write_key(&key);
        w.write_number(1u8);
    });
    assert_eq!(w.as_bytes(), br#"{"a\"b":1}"#);
}

#[test]
fn explicit_scopes_match_closure_scopes() {
    let mut w = Writer::new();
    w.begin_array();
    w.write_bool(false);
    w.begin_array();
    w.write_null();
    w.end_array();
    w.end_array();
    assert_eq!(w.into_bytes(), b"[false,[null]]");
}

#[test]
fn raw_spans_participate_in_separation() {
    let mut w = Writer::new();
    w.in_array(|w| {
        w.write_raw(b"{}");
        w.write_raw(b"[1]");
        w.write_number(2u8);
    });
    assert_eq!(w.as_bytes(), b"[{},[1],2]");
}

#[test]
fn top_level_scalar_needs_no_scope() {
    let mut w = Writer::with_capacity(16);
    w.write_string("only");
    assert_eq!(w.into_bytes(), br#""only""#);
}
