//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock setup so tests across the crate and
//! the tests/ directory build tags and page responses the same way.
#![allow(dead_code)]

use crate::constants::PAGE_SIZE;
use crate::ndef::NdefMessage;
use crate::protocol::tlv::build_frame;
use crate::transport::mock::{MockTag, MockTransport};
use crate::Result;

/// UID used by the emulated tags below.
#[doc(hidden)]
pub const SAMPLE_UID: [u8; 4] = [0x04, 0xA1, 0xB2, 0xC3];

/// MockTransport answering one read per 4-byte chunk of `bytes`, each with
/// status 90 00. A short last chunk is zero padded.
#[doc(hidden)]
pub fn mock_with_pages(bytes: &[u8]) -> MockTransport {
    let mut mock = MockTransport::new();
    for chunk in bytes.chunks(PAGE_SIZE) {
        let mut page = [0u8; PAGE_SIZE];
        page[..chunk.len()].copy_from_slice(chunk);
        mock.push_ok(&page);
    }
    mock
}

/// NTAG215 emulation holding `message` as its NDEF Message TLV.
#[doc(hidden)]
pub fn tag_with_message(message: &NdefMessage) -> Result<MockTag> {
    let frame = build_frame(&message.encode()?)?;
    Ok(MockTag::ntag215(&SAMPLE_UID).with_user_data(&frame))
}

/// NTAG215 emulation whose NDEF TLV is a single URI record.
#[doc(hidden)]
pub fn tag_with_uri(uri: &str) -> Result<MockTag> {
    tag_with_message(&NdefMessage::from_uri(uri))
}
