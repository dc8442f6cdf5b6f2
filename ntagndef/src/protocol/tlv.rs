// ntagndef/src/protocol/tlv.rs

//! NDEF Message TLV framing as stored in NTAG21x user memory.
//!
//! Format: [Tag 0x03(1)] [Len(1)] [Value(Len)] [Terminator 0xFE(1)] [0x00 padding]
//! The padding brings the frame to a whole number of 4-byte pages.

use crate::constants::{PAGE_SIZE, TLV_MAX_SHORT_LEN, TLV_NDEF_MESSAGE, TLV_TERMINATOR};
use crate::{Error, Result};

/// Number of zero bytes needed to round `len` up to a page boundary.
pub fn padding_len(len: usize) -> usize {
    (PAGE_SIZE - len % PAGE_SIZE) % PAGE_SIZE
}

/// Wrap an encoded NDEF message into a padded TLV frame ready to be written
/// page by page.
///
/// A 254-byte payload gets the LEN byte 0xFE, which a terminator-scanning
/// reader mistakes for the end of the frame.
pub fn build_frame(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > TLV_MAX_SHORT_LEN {
        return Err(Error::OversizedMessage {
            actual: payload.len(),
        });
    }

    let unpadded = 1 + 1 + payload.len() + 1;
    let mut out = Vec::with_capacity(unpadded + padding_len(unpadded));
    out.push(TLV_NDEF_MESSAGE);
    out.push(payload.len() as u8);
    out.extend_from_slice(payload);
    out.push(TLV_TERMINATOR);
    out.resize(unpadded + padding_len(unpadded), 0x00);
    Ok(out)
}

/// Locate the NDEF message inside a raw buffer read from page 4 onwards.
///
/// Only the leading Type-03 TLV is understood. The returned slice is exactly
/// `Len` bytes; whatever follows (terminator, padding, stale data) is ignored.
pub fn extract_ndef(buffer: &[u8]) -> Result<&[u8]> {
    if buffer.len() < 3 {
        return Err(Error::MalformedFrame(format!(
            "buffer too short: {} bytes",
            buffer.len()
        )));
    }
    if buffer[0] != TLV_NDEF_MESSAGE {
        return Err(Error::MalformedFrame(format!(
            "expected ndef message tlv (0x03), found {:#04x}",
            buffer[0]
        )));
    }

    let len = buffer[1] as usize;
    let end = 2 + len;
    if end > buffer.len() {
        return Err(Error::MalformedFrame(format!(
            "length {} exceeds captured data ({} bytes)",
            len,
            buffer.len() - 2
        )));
    }

    Ok(&buffer[2..end])
}
