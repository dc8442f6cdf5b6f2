// ntagndef/src/protocol/commands/mod.rs

pub mod read;
pub mod uid;
pub mod write;

pub use read::encode_read_page;
pub use uid::encode_get_uid;
pub use write::encode_write_page;

use crate::types::Page;

/// The pseudo-APDUs this crate sends to a PC/SC reader. New commands
/// should be added here and their encoder placed in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// READ BINARY of one 4-byte page: `FF B0 00 page 04`
    ReadPage { page: u8 },
    /// UPDATE BINARY of one 4-byte page: `FF D6 00 page 04 d0..d3`
    WritePage { page: u8, data: Page },
    /// GET DATA (UID): `FF CA 00 00 00`
    GetUid,
}

impl Command {
    /// Return the instruction byte of the APDU.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::ReadPage { .. } => crate::constants::INS_READ_BINARY,
            Self::WritePage { .. } => crate::constants::INS_UPDATE_BINARY,
            Self::GetUid => crate::constants::INS_GET_DATA,
        }
    }

    /// Page addressed by the command, if any.
    pub fn page(&self) -> Option<u8> {
        match self {
            Self::ReadPage { page } | Self::WritePage { page, .. } => Some(*page),
            Self::GetUid => None,
        }
    }

    /// Encode the command into the raw APDU bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ReadPage { page } => encode_read_page(*page),
            Self::WritePage { page, data } => encode_write_page(*page, data),
            Self::GetUid => encode_get_uid(),
        }
    }
}
