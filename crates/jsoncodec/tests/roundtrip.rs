//! Cross-checks decode and encode behavior against serde_json.

use jsoncodec::{codec, decode, encode};
use serde_json::json;

#[derive(Debug, Default, Clone, PartialEq)]
struct Track {
    title: String,
    duration_ms: u64,
    explicit: bool,
    tags: Vec<String>,
}

fn track_codec<'de>() -> codec::Object<'de, Track> {
    codec::object::<Track>()
        .required("title", codec::string(), |t: &Track| &t.title, |t, v| {
            t.title = v;
        })
        .required(
            "duration_ms",
            codec::number::<u64>(),
            |t: &Track| &t.duration_ms,
            |t, v| t.duration_ms = v,
        )
        .optional(
            "explicit",
            codec::boolean(),
            |t: &Track| &t.explicit,
            |t, v| t.explicit = v,
        )
        .optional(
            "tags",
            codec::array::<Vec<String>, _>(codec::string()),
            |t: &Track| &t.tags,
            |t, v| t.tags = v,
        )
}

#[test]
fn encoded_output_is_valid_json() {
    let track = Track {
        title: "Weird \"Quotes\"\n".to_string(),
        duration_ms: 215_000,
        explicit: true,
        tags: vec!["a/b".to_string(), "c".to_string()],
    };

    let encoded = encode(&track_codec(), &track);
    let parsed: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(
        parsed,
        json!({
            "title": "Weird \"Quotes\"\n",
            "duration_ms": 215_000,
            "explicit": true,
            "tags": ["a/b", "c"],
        })
    );

    assert_eq!(decode(&track_codec(), &encoded).unwrap(), track);
}

#[test]
fn string_unescaping_agrees_with_serde_json() {
    let documents = [
        r#""plain""#,
        r#""Aé😀""#,
        r#""tab\tnewline\n""#,
        r#""slash\/""#,
        "\"\\u0041\\u00e9\\ud83d\\ude00\"",
        r#""日本語""#,
    ];
    for doc in documents {
        let ours = decode(&codec::string(), doc.as_bytes()).unwrap();
        let theirs: String = serde_json::from_str(doc).unwrap();
        assert_eq!(ours, theirs, "disagreement on {doc}");
    }
}

#[test]
fn float_output_parses_back_identically() {
    for value in [0.0f64, 0.1, -2.5, 1e300, 5e-324, core::f64::consts::PI] {
        let ours = encode(&codec::number::<f64>(), &value);
        let parsed: f64 = serde_json::from_slice(&ours).unwrap();
        assert_eq!(parsed.to_bits(), value.to_bits(), "disagreement on {value}");
    }
}

#[test]
fn malformed_documents_are_rejected_by_both() {
    let documents = [
        "",
        "tru",
        "[1,]",
        "{\"a\":}",
        "\"unterminated",
        "01",
        "[1 2]",
        "{\"a\" 1}",
        "[1],",
    ];
    for doc in documents {
        assert!(
            decode(&codec::raw(), doc.as_bytes()).is_err(),
            "accepted {doc:?}"
        );
        assert!(
            serde_json::from_str::<serde_json::Value>(doc).is_err(),
            "serde_json accepted {doc:?}"
        );
    }
}

#[test]
fn accepted_documents_agree_with_serde_json() {
    let documents = [
        "null",
        "true",
        "[]",
        "{}",
        "[1,2.5,\"s\",null,{\"k\":[true]}]",
        " { \"a\" : 1 } ",
    ];
    for doc in documents {
        assert!(
            decode(&codec::raw(), doc.as_bytes()).is_ok(),
            "rejected {doc:?}"
        );
        assert!(serde_json::from_str::<serde_json::Value>(doc).is_ok());
    }
}
