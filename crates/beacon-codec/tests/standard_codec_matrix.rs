use beacon_codec::standard::{self, CodecError, StandardDecoder, StandardEncoder};
use beacon_codec::Value;

fn smap(fields: &[(&str, Value)]) -> Value {
    Value::Map(
        fields
            .iter()
            .map(|(k, v)| (Value::Str((*k).to_owned()), v.clone()))
            .collect(),
    )
}

#[test]
fn scalar_wire_matrix() {
    let mut encoder = StandardEncoder::new();

    assert_eq!(encoder.encode(&Value::Null).unwrap(), vec![0x00]);
    assert_eq!(encoder.encode(&Value::Bool(true)).unwrap(), vec![0x01]);
    assert_eq!(encoder.encode(&Value::Bool(false)).unwrap(), vec![0x02]);
    assert_eq!(
        encoder.encode(&Value::Int32(1)).unwrap(),
        vec![0x03, 0x01, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        encoder.encode(&Value::Int32(-2)).unwrap(),
        vec![0x03, 0xfe, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        encoder.encode(&Value::Int64(0x2_0000_0000)).unwrap(),
        vec![0x04, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        encoder.encode(&Value::LargeInt("1f".into())).unwrap(),
        vec![0x05, 0x02, b'1', b'f']
    );
    assert_eq!(
        encoder.encode(&Value::Str("hello".into())).unwrap(),
        vec![0x07, 0x05, b'h', b'e', b'l', b'l', b'o']
    );
    assert_eq!(
        encoder.encode(&Value::Bytes(vec![1, 2, 3])).unwrap(),
        vec![0x08, 0x03, 0x01, 0x02, 0x03]
    );
}

#[test]
fn float64_pads_to_eight_bytes() {
    let mut encoder = StandardEncoder::new();
    let encoded = encoder.encode(&Value::Float64(1.5)).unwrap();
    // tag + 7 padding bytes + little-endian payload
    assert_eq!(encoded.len(), 16);
    assert_eq!(encoded[0], 0x06);
    assert_eq!(&encoded[1..8], &[0u8; 7]);
    assert_eq!(f64::from_le_bytes(encoded[8..].try_into().unwrap()), 1.5);
}

#[test]
fn int32_list_pads_to_four_bytes() {
    let mut encoder = StandardEncoder::new();
    let encoded = encoder.encode(&Value::Int32List(vec![1, 2])).unwrap();
    assert_eq!(
        encoded,
        vec![0x09, 0x02, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]
    );
}

#[test]
fn int64_list_pads_to_eight_bytes() {
    let mut encoder = StandardEncoder::new();
    let encoded = encoder.encode(&Value::Int64List(vec![1])).unwrap();
    assert_eq!(encoded.len(), 16);
    assert_eq!(&encoded[..2], &[0x0a, 0x01]);
    assert_eq!(&encoded[2..8], &[0u8; 6]);
    assert_eq!(i64::from_le_bytes(encoded[8..].try_into().unwrap()), 1);
}

#[test]
fn size_prefix_boundaries() {
    let mut encoder = StandardEncoder::new();

    let short = encoder.encode(&Value::Str("a".repeat(253))).unwrap();
    assert_eq!(&short[..2], &[0x07, 253]);
    assert_eq!(short.len(), 2 + 253);

    let medium = encoder.encode(&Value::Str("a".repeat(254))).unwrap();
    assert_eq!(&medium[..4], &[0x07, 0xfe, 0xfe, 0x00]);
    assert_eq!(medium.len(), 4 + 254);

    let large = encoder.encode(&Value::Str("a".repeat(0x1_0000))).unwrap();
    assert_eq!(&large[..6], &[0x07, 0xff, 0x00, 0x00, 0x01, 0x00]);
    assert_eq!(large.len(), 6 + 0x1_0000);
}

#[test]
fn roundtrip_matrix() {
    let values = vec![
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Int32(123),
        Value::Int32(i32::MIN),
        Value::Int64(-4_807_526_976),
        Value::LargeInt("7fffffffffffffffffff".into()),
        Value::Float64(3_456.123_456_789),
        Value::Str(String::new()),
        Value::Str("abc".into()),
        Value::Str("a".repeat(256)),
        Value::Str("caf\u{e9} \u{1f600}".into()),
        Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]),
        Value::Int32List(vec![i32::MIN, -1, 0, 1, i32::MAX]),
        Value::Int64List(vec![i64::MIN, 0, i64::MAX]),
        Value::Float64List(vec![-0.5, 0.0, 1e300]),
        Value::List(vec![
            Value::Int32(1),
            Value::List(vec![Value::Float64(0.25)]),
            smap(&[("k", Value::Bool(true))]),
        ]),
        smap(&[
            ("foo", Value::Str("bar".into())),
            ("nested", smap(&[("n", Value::Int64List(vec![9]))])),
        ]),
    ];

    for value in values {
        let encoded = standard::encode(&value).unwrap();
        let decoded = standard::decode(&encoded)
            .unwrap_or_else(|e| panic!("decode failed for {value:?}: {e}"));
        assert_eq!(decoded, value);
    }
}

#[test]
fn map_keys_may_be_any_value() {
    let map = Value::Map(vec![
        (Value::Int32(7), Value::Str("seven".into())),
        (Value::Null, Value::Bool(false)),
        (
            Value::List(vec![Value::Int32(1)]),
            Value::Str("composite".into()),
        ),
    ]);
    let encoded = standard::encode(&map).unwrap();
    assert_eq!(standard::decode(&encoded).unwrap(), map);
}

#[test]
fn extension_variants_are_unsupported() {
    assert_eq!(
        standard::encode(&Value::Timestamp(5)),
        Err(CodecError::UnsupportedType("Timestamp"))
    );
    assert_eq!(
        standard::encode(&Value::Uri(url::Url::parse("https://x.io").unwrap())),
        Err(CodecError::UnsupportedType("Uri"))
    );
    assert_eq!(
        standard::encode(&Value::Undefined),
        Err(CodecError::UnsupportedType("Undefined"))
    );
}

#[test]
fn unknown_tag_is_a_format_fault() {
    assert_eq!(
        standard::decode(&[0x7f]),
        Err(CodecError::UnknownTag {
            tag: 0x7f,
            offset: 0
        })
    );
}

#[test]
fn truncated_payloads_are_fatal() {
    let mut encoder = StandardEncoder::new();
    let encoded = encoder.encode(&Value::Int64(i64::MAX)).unwrap();
    assert_eq!(
        standard::decode(&encoded[..encoded.len() - 3]),
        Err(CodecError::TruncatedBuffer)
    );

    // A declared string length running past the end is just as fatal.
    assert_eq!(
        standard::decode(&[0x07, 0x05, b'h', b'i']),
        Err(CodecError::TruncatedBuffer)
    );

    assert_eq!(standard::decode(&[]), Err(CodecError::TruncatedBuffer));
}

#[test]
fn decoder_leaves_cursor_on_next_value() {
    let mut encoder = StandardEncoder::new();
    encoder.write_any(&Value::Int32(1)).unwrap();
    encoder.write_any(&Value::Str("next".into())).unwrap();
    let buffer = encoder.writer.flush();

    let mut decoder = StandardDecoder::new(&buffer);
    assert_eq!(decoder.read_any().unwrap(), Value::Int32(1));
    assert_eq!(decoder.read_any().unwrap(), Value::Str("next".into()));
}
