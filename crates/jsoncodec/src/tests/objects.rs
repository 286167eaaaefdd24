use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{Error, ErrorKind, codec, decode, encode};

#[derive(Debug, Default, Clone, PartialEq)]
struct Session {
    id: String,
    count: u32,
    note: String,
}

fn session_codec<'de>() -> codec::Object<'de, Session> {
    codec::object::<Session>()
        .required("id", codec::string(), |s: &Session| &s.id, |s, v| s.id = v)
        .optional(
            "count",
            codec::number::<u32>(),
            |s: &Session| &s.count,
            |s, v| s.count = v,
        )
        .optional(
            "note",
            codec::empty_as_omit(codec::string()),
            |s: &Session| &s.note,
            |s, v| s.note = v,
        )
}

#[test]
fn decodes_fields_in_any_order() {
    let expected = Session {
        id: "a".to_string(),
        count: 3,
        note: String::new(),
    };
    assert_eq!(
        decode(&session_codec(), br#"{"id":"a","count":3}"#),
        Ok(expected.clone())
    );
    assert_eq!(
        decode(&session_codec(), br#"{ "count" : 3 , "id" : "a" }"#),
        Ok(expected)
    );
}

#[test]
fn optional_fields_keep_the_record_default_when_absent() {
    let got = decode(&session_codec(), br#"{"id":"x"}"#).unwrap();
    assert_eq!(
        got,
        Session {
            id: "x".to_string(),
            count: 0,
            note: String::new(),
        }
    );
}

#[test]
fn missing_required_field_is_reported_by_name() {
    let err = decode(&session_codec(), br#"{"count":1}"#).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingRequiredField("id".to_string()));
}

#[test]
fn empty_object_reports_at_its_closing_brace() {
    let err = decode(&session_codec(), b"{}").unwrap_err();
    assert_eq!(
        err,
        Error::new(ErrorKind::MissingRequiredField("id".to_string()), 2)
    );
}

#[test]
fn unknown_keys_are_skipped_structurally() {
    let input = br#"{"id":"x","extra":{"deep":[1,2,{"a":null}]},"count":7,"more":"s"}"#;
    let got = decode(&session_codec(), input).unwrap();
    assert_eq!(got.id, "x");
    assert_eq!(got.count, 7);
}

#[test]
fn keys_are_matched_after_unescaping() {
    let input = b"{\"i\\u0064\":\"x\"}";
    let got = decode(&session_codec(), input).unwrap();
    assert_eq!(got.id, "x");
}

#[test]
fn encodes_in_registration_order() {
    let v = Session {
        id: "x".to_string(),
        count: 2,
        note: "n".to_string(),
    };
    assert_eq!(encode(&session_codec(), &v), br#"{"id":"x","count":2,"note":"n"}"#);
}

#[test]
fn omitted_fields_disappear_with_their_keys() {
    let v = Session {
        id: "x".to_string(),
        count: 0,
        note: String::new(),
    };
    assert_eq!(encode(&session_codec(), &v), br#"{"id":"x","count":0}"#);
}

#[test]
fn default_constructed_codec_accepts_any_object() {
    let c: codec::Object<'_, Session> = codec::Object::default();
    assert_eq!(decode(&c, br#"{"ignored":1}"#), Ok(Session::default()));
    assert_eq!(encode(&c, &Session::default()), b"{}");
}

#[test]
fn factory_seeds_each_decode() {
    struct Counter {
        hits: u32,
    }

    let c = codec::object_with(|| Counter { hits: 100 }).optional(
        "hits",
        codec::number::<u32>(),
        |c: &Counter| &c.hits,
        |c, v| c.hits = v,
    );
    assert_eq!(decode(&c, b"{}").unwrap().hits, 100);
    assert_eq!(decode(&c, br#"{"hits":3}"#).unwrap().hits, 3);
}

#[test]
fn duplicate_registration_keeps_the_first() {
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Pair {
        a: u32,
        b: u32,
    }

    let c = codec::object::<Pair>()
        .required("v", codec::number::<u32>(), |p: &Pair| &p.a, |p, v| p.a = v)
        .optional("v", codec::number::<u32>(), |p: &Pair| &p.b, |p, v| p.b = v);
    let got = decode(&c, br#"{"v":9}"#).unwrap();
    assert_eq!(got, Pair { a: 9, b: 0 });
    assert_eq!(encode(&c, &got), br#"{"v":9}"#);
}

#[test]
fn ignored_fields_validate_without_storing() {
    #[derive(Debug, Default, PartialEq)]
    struct Versioned {
        name: String,
    }

    let c = codec::object::<Versioned>()
        .required_ignored("version", codec::number::<u32>())
        .required("name", codec::string(), |v: &Versioned| &v.name, |v, s| v.name = s);

    assert_eq!(decode(&c, br#"{"version":1,"name":"a"}"#).unwrap().name, "a");
    assert_eq!(
        decode(&c, br#"{"name":"a"}"#).unwrap_err().kind(),
        &ErrorKind::MissingRequiredField("version".to_string())
    );
    assert!(decode(&c, br#"{"version":"x","name":"a"}"#).is_err());

    let v = Versioned {
        name: "a".to_string(),
    };
    assert_eq!(encode(&c, &v), br#"{"name":"a"}"#);
}

#[test]
fn object_codecs_nest() {
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Playlist {
        name: String,
        sessions: Vec<Session>,
    }

    let c = codec::object::<Playlist>()
        .required("name", codec::string(), |p: &Playlist| &p.name, |p, v| p.name = v)
        .required(
            "sessions",
            codec::array::<Vec<Session>, _>(session_codec()),
            |p: &Playlist| &p.sessions,
            |p, v| p.sessions = v,
        );

    let input = br#"{"name":"pl","sessions":[{"id":"a"},{"id":"b","count":1}]}"#;
    let got = decode(&c, input).unwrap();
    assert_eq!(got.sessions.len(), 2);
    assert_eq!(got.sessions[1].count, 1);
    assert_eq!(
        encode(&c, &got),
        br#"{"name":"pl","sessions":[{"id":"a","count":0},{"id":"b","count":1}]}"#.to_vec()
    );
}

#[test]
fn map_codec_collects_arbitrary_keys() {
    let c = codec::map(codec::number::<i64>());
    let got = decode(&c, br#"{"b":2,"a":1,"b":3}"#).unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(got["a"], 1);
    assert_eq!(got["b"], 3);
    assert_eq!(encode(&c, &got), br#"{"a":1,"b":3}"#);
}

#[test]
fn rejects_malformed_objects() {
    let c = session_codec();
    assert_eq!(
        decode(&c, br#"{"id" "x"}"#).unwrap_err().kind(),
        &ErrorKind::UnexpectedToken("':'")
    );
    assert_eq!(
        decode(&c, br#"{"id":"x" "count":1}"#).unwrap_err().kind(),
        &ErrorKind::UnexpectedToken("',' or '}'")
    );
    assert_eq!(
        decode(&c, br#"{"id":"x","#).unwrap_err().kind(),
        &ErrorKind::UnexpectedEnd
    );
}
