// ntagndef/src/ndef/header.rs

use crate::constants::{
    NDEF_FLAG_CF, NDEF_FLAG_IL, NDEF_FLAG_MB, NDEF_FLAG_ME, NDEF_FLAG_SR, NDEF_TNF_MASK,
};

/// Type Name Format, the low three bits of the record flag byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeNameFormat {
    Empty = 0,
    WellKnown = 1,
    Media = 2,
    AbsoluteUri = 3,
    External = 4,
    Unknown = 5,
    Unchanged = 6,
    Reserved = 7,
}

impl TypeNameFormat {
    /// Map the low three bits of a flag byte. Higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & NDEF_TNF_MASK {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Media,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Decoded flag byte of an NDEF record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub tnf: TypeNameFormat,
}

impl RecordHeader {
    pub fn from_byte(b: u8) -> Self {
        Self {
            message_begin: b & NDEF_FLAG_MB != 0,
            message_end: b & NDEF_FLAG_ME != 0,
            chunked: b & NDEF_FLAG_CF != 0,
            short_record: b & NDEF_FLAG_SR != 0,
            has_id_length: b & NDEF_FLAG_IL != 0,
            tnf: TypeNameFormat::from_bits(b),
        }
    }

    pub fn to_byte(&self) -> u8 {
        let mut b = self.tnf.as_u8();
        for (set, flag) in [
            (self.message_begin, NDEF_FLAG_MB),
            (self.message_end, NDEF_FLAG_ME),
            (self.chunked, NDEF_FLAG_CF),
            (self.short_record, NDEF_FLAG_SR),
            (self.has_id_length, NDEF_FLAG_IL),
        ] {
            if set {
                b |= flag;
            }
        }
        b
    }
}
