use crate::constants::{INS_READ_BINARY, PAGE_SIZE, PCSC_CLA};

/// Encode READ BINARY for a single page: `FF B0 00 <page> 04`
pub fn encode_read_page(page: u8) -> Vec<u8> {
    vec![PCSC_CLA, INS_READ_BINARY, 0x00, page, PAGE_SIZE as u8]
}
