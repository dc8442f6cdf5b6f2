#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use ntagndef::Error;
use ntagndef::protocol::{build_frame, extract_ndef};

#[test]
fn frame_matches_tag_capture() {
    let value = fixtures::bytes("D1 01 03 55 04 65 78");
    let frame = build_frame(&value).unwrap();
    assert_eq!(frame, fixtures::bytes(fixtures::EX_URI_PAGES));
    assert_eq!(extract_ndef(&frame).unwrap(), &value[..]);
}

#[test]
fn truncated_capture_is_malformed() {
    match extract_ndef(&fixtures::bytes(fixtures::TRUNCATED_PAGES)) {
        Err(Error::MalformedFrame(_)) => {}
        other => panic!("expected MalformedFrame, got {:?}", other),
    }
}

#[test]
fn frame_length_limits() {
    let frame = build_frame(&[0xAB; 255]).unwrap();
    assert_eq!(frame.len() % 4, 0);
    assert_eq!(frame[1], 0xFF);
    assert!(matches!(
        build_frame(&[0xAB; 256]),
        Err(Error::OversizedMessage { actual: 256 })
    ));
}
