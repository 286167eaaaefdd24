#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use jsoncodec::{codec, decode, decode_value, encode};
use libfuzzer_sys::fuzz_target;

/// A record shape exercised through the object codec builder.
#[derive(Debug, Default, Clone, PartialEq, Arbitrary)]
struct Record {
    name: String,
    score: Option<i32>,
    flags: Vec<bool>,
}

fn record_codec<'de>() -> codec::Object<'de, Record> {
    codec::object::<Record>()
        .required("name", codec::string(), |r: &Record| &r.name, |r, v| {
            r.name = v;
        })
        .optional(
            "score",
            codec::option(codec::number::<i32>()),
            |r: &Record| &r.score,
            |r, v| r.score = v,
        )
        .optional(
            "flags",
            codec::array::<Vec<bool>, _>(codec::boolean()),
            |r: &Record| &r.flags,
            |r, v| r.flags = v,
        )
}

#[derive(Debug, Arbitrary)]
struct FuzzCase {
    data: Vec<u8>,
    record: Record,
}

fuzz_target!(|case: FuzzCase| {
    let data = &case.data[..];

    // The structural scan must accept every document serde_json accepts
    // (the reverse does not hold: serde_json enforces a recursion limit and
    // interprets string contents, the raw scan does neither).
    let raw = decode(&codec::raw(), data);
    if serde_json::from_slice::<serde_json::Value>(data).is_ok() {
        assert!(raw.is_ok(), "rejected a document serde_json accepts");
    }

    match raw {
        // Raw spans re-encode verbatim.
        Ok(span) => assert_eq!(encode(&codec::raw(), &span), span.as_bytes()),
        // Errors point into (or just past) the input.
        Err(err) => assert!(err.offset() <= data.len()),
    }

    // Interpreting decoders must never panic, whatever the input.
    let _ = decode(&codec::string(), data);
    let _ = decode(&codec::number::<f64>(), data);
    let _ = decode(&codec::number::<i64>(), data);
    let _ = decode_value::<Vec<bool>>(data);
    let _ = decode_value::<BTreeMap<String, Option<f64>>>(data);

    // Structured values survive an encode/decode round trip.
    let record = case.record;
    let encoded = encode(&record_codec(), &record);
    assert_eq!(decode(&record_codec(), &encoded), Ok(record));
});
