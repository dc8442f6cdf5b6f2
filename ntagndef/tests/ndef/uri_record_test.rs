use ntagndef::ndef::uri::{URI_PREFIXES, abbreviate};
use ntagndef::prelude::*;

#[test]
fn every_prefix_survives_a_message_roundtrip() {
    for (code, prefix) in URI_PREFIXES.iter().enumerate() {
        let uri = format!("{}host/path", prefix);
        assert_eq!(abbreviate(&uri).0 as usize, code, "prefix {:?}", prefix);

        let msg = NdefMessage::from_uri(uri.as_str());
        let back = NdefMessage::decode(&msg.encode().unwrap()).unwrap();
        assert_eq!(back.uris().collect::<Vec<_>>(), vec![uri.as_str()]);
    }
}

#[test]
fn uri_record_wire_bytes() {
    let bytes = NdefMessage::from_uri("https://example.com").encode().unwrap();
    let mut expected = vec![0xD1, 0x01, 0x0C, 0x55, 0x04];
    expected.extend_from_slice(b"example.com");
    assert_eq!(bytes, expected);
}

#[test]
fn unknown_identifier_code_is_decode_error() {
    match NdefMessage::decode(&[0xD1, 0x01, 0x02, 0x55, 0x30, b'x']) {
        Err(Error::Decode(_)) => {}
        other => panic!("expected Decode, got {:?}", other),
    }
}
