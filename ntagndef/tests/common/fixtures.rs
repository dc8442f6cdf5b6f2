// fixtures.rs: tag captures and UIDs used across the integration tests

use ntagndef::Uid;

/// Three pages holding one URI record for `https://ex`.
pub const EX_URI_PAGES: &str = "03 07 D1 01 03 55 04 65 78 FE 00 00";

/// Two pages whose TLV claims 7 value bytes but carries only 4.
pub const TRUNCATED_PAGES: &str = "03 07 55 04 65 78 FE 00";

pub const SAMPLE_UID: &str = "04A1B2C3";

/// Decode a hex capture, ignoring spaces.
pub fn bytes(capture: &str) -> Vec<u8> {
    hex::decode(capture.replace(' ', "")).unwrap()
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes(&bytes(SAMPLE_UID))
}
