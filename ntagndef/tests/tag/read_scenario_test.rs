#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use ntagndef::prelude::*;
use ntagndef::test_support::mock_with_pages;
use ntagndef::transport::MockTag;

#[test]
fn reads_uri_from_three_pages() {
    common::init_logger();
    let mut mock = mock_with_pages(&fixtures::bytes(fixtures::EX_URI_PAGES));
    let tag = Tag::default();

    let msg = tag.read_message(&mut mock).unwrap();
    assert_eq!(msg.uris().collect::<Vec<_>>(), vec!["https://ex"]);
    assert_eq!(
        mock.sent,
        vec![
            vec![0xFF, 0xB0, 0x00, 0x04, 0x04],
            vec![0xFF, 0xB0, 0x00, 0x05, 0x04],
            vec![0xFF, 0xB0, 0x00, 0x06, 0x04],
        ]
    );
}

#[test]
fn truncated_capture_is_malformed() {
    let mut mock = mock_with_pages(&fixtures::bytes(fixtures::TRUNCATED_PAGES));
    match Tag::default().read_message(&mut mock) {
        Err(Error::MalformedFrame(_)) => {}
        other => panic!("expected MalformedFrame, got {:?}", other),
    }
    assert_eq!(mock.sent.len(), 2);
}

#[test]
fn terminator_in_ninth_page_means_nine_reads() {
    let mut bytes = vec![0x03, 0x21];
    bytes.extend_from_slice(&[0xD1, 0x01, 0x1D, 0x55, 0x04]);
    bytes.extend(std::iter::repeat_n(b'a', 28));
    bytes.push(0xFE);
    assert_eq!(bytes.len(), 36);

    let mut card = MockTag::ntag215(&[0x04]).with_user_data(&bytes);
    let msg = Tag::default().read_message(&mut card).unwrap();

    assert_eq!(card.sent.len(), 9);
    assert_eq!(msg.uris().next().map(str::len), Some("https://".len() + 28));
}

#[test]
fn status_error_on_page_six() {
    let mut card = MockTag::ntag215(&[0x04])
        .with_user_data(&[0x03, 0x40, 0xD1, 0x01])
        .fail_page(6, 0x6A, 0x82);

    match Tag::default().read_message(&mut card) {
        Err(Error::TransportFailure {
            page: 6,
            sw1: 0x6A,
            sw2: 0x82,
        }) => {}
        other => panic!("expected TransportFailure, got {:?}", other),
    }
    assert_eq!(card.sent.len(), 3);
}

#[test]
fn card_removed_mid_read_names_the_page() {
    let mut card = ntagndef::test_support::tag_with_uri("https://example.com/long/path")
        .unwrap()
        .remove_after(2);

    let err = Tag::default().read_message(&mut card).unwrap_err();
    assert_eq!(err.page(), Some(6));
    assert!(matches!(err, Error::PageIo { .. }));
}
