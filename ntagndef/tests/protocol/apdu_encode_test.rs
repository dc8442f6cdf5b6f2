use ntagndef::protocol::{ApduResponse, Command};
use ntagndef::{Error, Page, StatusWord};

#[test]
fn page_commands_encode_to_pcsc_apdus() {
    assert_eq!(
        Command::ReadPage { page: 0x10 }.encode(),
        vec![0xFF, 0xB0, 0x00, 0x10, 0x04]
    );
    let data = Page::from_bytes([0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(
        Command::WritePage { page: 5, data }.encode(),
        vec![0xFF, 0xD6, 0x00, 0x05, 0x04, 0xDE, 0xAD, 0xBE, 0xEF]
    );
    assert_eq!(Command::GetUid.encode(), vec![0xFF, 0xCA, 0x00, 0x00, 0x00]);
    assert_eq!(Command::GetUid.page(), None);
}

#[test]
fn response_splits_status_word() {
    let resp = ApduResponse::from_raw(&[0x01, 0x02, 0x90, 0x00]).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.data(), &[0x01, 0x02]);

    let resp = ApduResponse::from_raw(&[0x63, 0x00]).unwrap();
    assert_eq!(resp.status(), StatusWord::new(0x63, 0x00));
    assert!(!resp.is_success());

    match ApduResponse::from_raw(&[0x90]) {
        Err(Error::InvalidLength { .. }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}
