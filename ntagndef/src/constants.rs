// ntagndef/src/constants.rs
//! Common protocol constants used across the crate

/// Class byte of the PC/SC pseudo-APDUs used for contactless storage cards.
pub const PCSC_CLA: u8 = 0xFF;

/// READ BINARY instruction (one NTAG page per command here).
pub const INS_READ_BINARY: u8 = 0xB0;

/// UPDATE BINARY instruction.
pub const INS_UPDATE_BINARY: u8 = 0xD6;

/// GET DATA instruction; with P1 = 0x00 the reader returns the UID.
pub const INS_GET_DATA: u8 = 0xCA;

/// Successful status word: 0x90 0x00
pub const SW_SUCCESS: [u8; 2] = [0x90, 0x00];

/// NTAG21x page size in bytes
pub const PAGE_SIZE: usize = 4;

/// First user-data page on NTAG21x (pages 0..=3 hold UID, lock and CC bytes)
pub const FIRST_USER_PAGE: u8 = 4;

/// Default read ceiling: NTAG216 exposes 222 user pages (888 bytes).
pub const DEFAULT_MAX_PAGES: usize = 222;

/// TLV tag of an NDEF Message block
pub const TLV_NDEF_MESSAGE: u8 = 0x03;

/// TLV terminator block
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Largest NDEF payload expressible in the one-byte TLV length field
pub const TLV_MAX_SHORT_LEN: usize = 255;

/// NDEF record header flags
pub const NDEF_FLAG_MB: u8 = 0x80;
pub const NDEF_FLAG_ME: u8 = 0x40;
pub const NDEF_FLAG_CF: u8 = 0x20;
pub const NDEF_FLAG_SR: u8 = 0x10;
pub const NDEF_FLAG_IL: u8 = 0x08;
pub const NDEF_TNF_MASK: u8 = 0x07;

/// Record type of the NFC Forum well-known URI record
pub const NDEF_TYPE_URI: &[u8] = b"U";
