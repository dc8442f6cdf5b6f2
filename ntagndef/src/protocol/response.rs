// ntagndef/src/protocol/response.rs

use crate::types::StatusWord;
use crate::{Error, Result};

/// Response to one APDU: the data bytes and the trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    data: Vec<u8>,
    status: StatusWord,
}

impl ApduResponse {
    pub fn new(data: Vec<u8>, status: StatusWord) -> Self {
        Self { data, status }
    }

    /// Split a raw reader response into data and SW1 SW2.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let split = raw.len().checked_sub(2).ok_or(Error::InvalidLength {
            expected: 2,
            actual: raw.len(),
        })?;
        let (data, sw) = raw.split_at(split);
        Ok(Self {
            data: data.to_vec(),
            status: StatusWord::new(sw[0], sw[1]),
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn status(&self) -> StatusWord {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
