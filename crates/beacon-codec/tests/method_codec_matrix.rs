use beacon_codec::method::{
    decode_envelope, decode_method_call, encode_envelope, encode_method_call,
};
use beacon_codec::standard::CodecError;
use beacon_codec::{MethodCall, MethodResult, Value};
use url::Url;

fn track_call() -> MethodCall {
    MethodCall::new(
        "track",
        Value::Map(vec![
            (
                Value::Str("eventName".into()),
                Value::Str("Signed Up".into()),
            ),
            (
                Value::Str("properties".into()),
                Value::Map(vec![
                    (Value::Str("plan".into()), Value::Str("pro".into())),
                    (Value::Str("when".into()), Value::Timestamp(1_665_147_899_999)),
                    (
                        Value::Str("referrer".into()),
                        Value::Uri(Url::parse("https://metrics.example.com").unwrap()),
                    ),
                ]),
            ),
        ]),
    )
}

#[test]
fn method_call_roundtrip() {
    let call = track_call();
    let encoded = encode_method_call(&call).unwrap();
    assert_eq!(decode_method_call(&encoded).unwrap(), call);
}

#[test]
fn method_call_requires_string_name() {
    // A buffer starting with a null tag is not a method call.
    assert_eq!(
        decode_method_call(&[0x00, 0x00]),
        Err(CodecError::MalformedEnvelope)
    );
}

#[test]
fn success_envelope_roundtrip() {
    let result = MethodResult::Success(Value::Str("instance-1".into()));
    let encoded = encode_envelope(&result).unwrap();
    assert_eq!(encoded[0], 0);
    assert_eq!(decode_envelope(&encoded).unwrap(), result);
}

#[test]
fn success_envelope_with_aligned_payload() {
    // The envelope byte shifts every offset by one; double alignment must
    // account for it on both sides.
    let result = MethodResult::Success(Value::Float64(12.25));
    let encoded = encode_envelope(&result).unwrap();
    assert_eq!(decode_envelope(&encoded).unwrap(), result);
}

#[test]
fn error_envelope_roundtrip() {
    let result = MethodResult::Error {
        code: "AnalyticsBridgeException".into(),
        message: Some("missing required argument: eventName".into()),
        details: Value::Null,
    };
    let encoded = encode_envelope(&result).unwrap();
    assert_eq!(encoded[0], 1);
    assert_eq!(decode_envelope(&encoded).unwrap(), result);
}

#[test]
fn error_envelope_without_message() {
    let result = MethodResult::Error {
        code: "E".into(),
        message: None,
        details: Value::Int32(3),
    };
    let encoded = encode_envelope(&result).unwrap();
    assert_eq!(decode_envelope(&encoded).unwrap(), result);
}

#[test]
fn not_implemented_is_an_empty_reply() {
    let encoded = encode_envelope(&MethodResult::NotImplemented).unwrap();
    assert!(encoded.is_empty());
    assert_eq!(
        decode_envelope(&encoded).unwrap(),
        MethodResult::NotImplemented
    );
}

#[test]
fn unknown_envelope_marker_is_malformed() {
    assert_eq!(decode_envelope(&[2, 0]), Err(CodecError::MalformedEnvelope));
}
