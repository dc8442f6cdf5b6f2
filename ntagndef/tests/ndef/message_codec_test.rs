use ntagndef::ndef::{RawRecord, RecordHeader};
use ntagndef::prelude::*;

#[test]
fn mixed_message_keeps_order_and_flags() {
    let msg: NdefMessage = vec![
        NdefRecord::uri("https://a.example"),
        OpaqueRecord::new(TypeNameFormat::Media, b"text/plain", b"hello").into(),
        NdefRecord::from(UriRecord::new("tel:+3612345").with_id(b"t".to_vec())),
    ]
    .into_iter()
    .collect();

    let bytes = msg.encode().unwrap();
    let (first, used) = RawRecord::parse(&bytes).unwrap();
    assert!(first.header.message_begin);
    assert!(!first.header.message_end);
    assert!(first.header.short_record);

    let back = NdefMessage::decode(&bytes).unwrap();
    assert_eq!(back, msg);
    assert_eq!(back.len(), 3);
    assert_eq!(back.records()[2].id(), Some(&b"t"[..]));
    assert!(used < bytes.len());
}

#[test]
fn long_payload_uses_four_byte_length() {
    let payload = vec![0x5A; 300];
    let msg = NdefMessage::new(vec![
        OpaqueRecord::new(TypeNameFormat::External, b"ex.com:blob", &payload).into(),
    ]);
    let bytes = msg.encode().unwrap();
    let header = RecordHeader::from_byte(bytes[0]);
    assert!(!header.short_record);
    assert_eq!(&bytes[2..6], &300u32.to_be_bytes());
    assert_eq!(NdefMessage::decode(&bytes).unwrap(), msg);
}

#[test]
fn truncated_record_is_decode_error() {
    let mut bytes = NdefMessage::from_uri("https://example.com").encode().unwrap();
    bytes.truncate(bytes.len() - 3);
    assert!(matches!(NdefMessage::decode(&bytes), Err(Error::Decode(_))));
}
