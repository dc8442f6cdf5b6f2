// ntagndef/src/types.rs

use crate::Error;
use crate::constants::{PAGE_SIZE, SW_SUCCESS};
use derive_more::{Display, From};

/// Page - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct Page([u8; PAGE_SIZE]);

impl Page {
    pub fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }

    /// True when the page holds a TLV terminator byte anywhere.
    pub fn contains_terminator(&self) -> bool {
        self.0.contains(&crate::constants::TLV_TERMINATOR)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Page {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PAGE_SIZE {
            return Err(Error::InvalidLength {
                expected: PAGE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PAGE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// UID of the tag as returned by GET DATA. NTAG21x UIDs are 7 bytes but
/// readers may report 4 or 10 byte identifiers for other cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Uppercase hex without separators, e.g. `04A1B2C3`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Two trailing status bytes of every APDU response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02X}{:02X}", sw1, sw2)]
pub struct StatusWord {
    pub sw1: u8,
    pub sw2: u8,
}

impl StatusWord {
    pub const SUCCESS: Self = Self::new(SW_SUCCESS[0], SW_SUCCESS[1]);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}
