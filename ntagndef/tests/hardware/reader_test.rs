#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use ntagndef::prelude::*;
use serial_test::serial;

// These tests need a PC/SC reader with an NTAG21x on it. They are marked
// `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p ntagndef --test hardware --features pcsc -- --ignored
//

#[test]
#[ignore]
#[serial]
fn read_uid_from_tag() -> Result<()> {
    if let Some(mut transport) = common::connect_reader()? {
        let uid = Tag::default().read_uid(&mut transport)?;
        assert!(!uid.as_bytes().is_empty());
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn write_then_read_session() -> Result<()> {
    if let Some(mut transport) = common::connect_reader()? {
        let tag = Tag::default();
        let report = handle_write_session(&mut transport, &tag, "https://example.com")?;
        let msg = handle_read_session(&mut transport, &tag)?;
        assert_eq!(msg.uris().collect::<Vec<_>>(), vec![report.url.as_str()]);
    }
    Ok(())
}
