// ntagndef/src/ndef/message.rs

use crate::Result;
use crate::ndef::codec::{decode_message, encode_message};
use crate::ndef::record::NdefRecord;

/// Ordered list of records stored in one NDEF Message TLV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    /// Message holding a single URI record.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self::new(vec![NdefRecord::uri(uri)])
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        decode_message(data).map(Self::new)
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        encode_message(&self.records)
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<NdefRecord> {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// URIs of all URI records, in message order.
    pub fn uris(&self) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .filter_map(NdefRecord::as_uri)
            .map(|r| r.uri())
    }
}

impl From<Vec<NdefRecord>> for NdefMessage {
    fn from(records: Vec<NdefRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<NdefRecord> for NdefMessage {
    fn from_iter<I: IntoIterator<Item = NdefRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
