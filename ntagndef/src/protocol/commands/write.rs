use crate::constants::{INS_UPDATE_BINARY, PAGE_SIZE, PCSC_CLA};
use crate::types::Page;

/// Encode UPDATE BINARY for a single page: `FF D6 00 <page> 04 <4 bytes>`
pub fn encode_write_page(page: u8, data: &Page) -> Vec<u8> {
    let mut out = Vec::with_capacity(5 + PAGE_SIZE);
    out.extend_from_slice(&[PCSC_CLA, INS_UPDATE_BINARY, 0x00, page, PAGE_SIZE as u8]);
    out.extend_from_slice(data.as_bytes());
    out
}
