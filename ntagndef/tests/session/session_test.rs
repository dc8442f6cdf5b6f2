#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use ntagndef::prelude::*;
use ntagndef::transport::MockTag;

#[test]
fn write_session_then_read_session() {
    common::init_logger();
    let mut card = MockTag::ntag215(fixtures::sample_uid().as_bytes());
    let tag = TagBuilder::new().build().unwrap();

    let report = handle_write_session(&mut card, &tag, "https://example.com").unwrap();
    assert_eq!(report.url, "https://example.com?uid=04A1B2C3");
    assert_eq!(report.uid, Some(fixtures::sample_uid()));

    let msg = handle_read_session(&mut card, &tag).unwrap();
    assert_eq!(msg, NdefMessage::from_uri("https://example.com?uid=04A1B2C3"));
}

#[test]
fn tally_over_several_cards() {
    let tag = Tag::default();
    let mut tally = SessionTally::new();

    let mut good = ntagndef::test_support::tag_with_uri("https://a.example").unwrap();
    tally.record(&handle_read_session(&mut good, &tag));

    let mut blank = MockTag::ntag215(&[0x04]);
    tally.record(&handle_read_session(&mut blank, &tag));

    let mut removed = MockTag::ntag215(&[0x04]).remove_after(0);
    tally.record(&handle_write_session(&mut removed, &tag, "https://b.example"));

    assert_eq!(tally.processed, 3);
    assert_eq!(tally.succeeded, 1);
    assert_eq!(tally.failed, 2);
}

#[test]
fn base_url_with_query_gets_ampersand() {
    let url = build_url_with_uid("https://e.org/t?a=1", Some(&fixtures::sample_uid()));
    assert_eq!(url, "https://e.org/t?a=1&uid=04A1B2C3");
}
