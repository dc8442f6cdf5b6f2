use ntagndef::prelude::*;
use ntagndef::transport::{MockTag, MockTransport};

#[test]
fn write_lands_on_consecutive_pages_from_four() {
    let mut card = MockTag::ntag215(&[0x04, 0x11]);
    let msg = NdefMessage::from_uri("https://example.com");
    let pages = Tag::default().write_message(&mut card, &msg).unwrap();

    // 03 10 + 16 byte message + FE, padded to 20 bytes
    assert_eq!(pages, 5);
    let pages_hit: Vec<u8> = card.sent.iter().map(|apdu| apdu[3]).collect();
    assert_eq!(pages_hit, vec![4, 5, 6, 7, 8]);
    assert_eq!(&card.user_data()[..3], &[0x03, 0x10, 0xD1]);
    assert_eq!(card.user_data()[18], 0xFE);
}

#[test]
fn oversized_message_leaves_tag_untouched() {
    let mut mock = MockTransport::new();
    let msg = NdefMessage::from_uri(format!("https://{}", "x".repeat(300)));

    match Tag::default().write_message(&mut mock, &msg) {
        Err(Error::OversizedMessage { .. }) => {}
        other => panic!("expected OversizedMessage, got {:?}", other),
    }
    assert!(mock.sent.is_empty());
}

#[test]
fn write_past_end_of_tag_reports_page() {
    // NTAG213 has 45 pages; a 200 byte payload needs pages 4..=55
    let mut card = MockTag::new(MockTag::NTAG213_PAGES, &[0x04]);
    let payload = vec![0x00; 200];

    match Tag::default().write_payload(&mut card, &payload) {
        Err(Error::TransportFailure {
            page: 45,
            sw1: 0x6A,
            sw2: 0x82,
        }) => {}
        other => panic!("expected TransportFailure, got {:?}", other),
    }
}
