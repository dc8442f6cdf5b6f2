// ntagndef/src/session.rs

//! One read or write per card presentation.
//!
//! Card detection stays with the caller: the caller waits for a card, opens a
//! transport, calls one of the handlers and records the outcome in a
//! [`SessionTally`] it owns.

use log::{info, warn};

use crate::constants::PAGE_SIZE;
use crate::ndef::NdefMessage;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::Uid;
use crate::{Error, Result};

/// Outcome of [`handle_write_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteReport {
    /// URL actually written to the tag.
    pub url: String,
    /// UID appended to the URL, if the card reported one.
    pub uid: Option<Uid>,
    pub pages_written: usize,
    /// Bytes written to the tag, padding included.
    pub bytes_written: usize,
}

/// Read the tag and return its NDEF message.
pub fn handle_read_session(transport: &mut dyn Transport, tag: &Tag) -> Result<NdefMessage> {
    let message = tag.read_message(transport)?;
    for (i, record) in message.records().iter().enumerate() {
        info!("record {}: {}", i, record);
    }
    Ok(message)
}

/// Write `base_url` with the card's UID appended as a single URI record.
///
/// A card that refuses to report its UID (a non-9000 status or an empty
/// answer) still gets `base_url`, unchanged. A failed transmit aborts the
/// session before anything is written.
pub fn handle_write_session(
    transport: &mut dyn Transport,
    tag: &Tag,
    base_url: &str,
) -> Result<WriteReport> {
    let uid = match tag.read_uid(transport) {
        Ok(uid) => {
            info!("card uid {}", uid);
            Some(uid)
        }
        Err(e @ (Error::UidRejected { .. } | Error::InvalidLength { .. })) => {
            warn!("uid unavailable, writing url without it: {}", e);
            None
        }
        Err(e) => return Err(e),
    };

    let url = build_url_with_uid(base_url, uid.as_ref());
    let pages_written = tag.write_message(transport, &NdefMessage::from_uri(url.as_str()))?;
    info!("wrote {} ({} pages)", url, pages_written);

    Ok(WriteReport {
        url,
        uid,
        pages_written,
        bytes_written: pages_written * PAGE_SIZE,
    })
}

/// Append `uid=<HEX>` as a query parameter. A base URL that already has a
/// query gets `&`, any other gets `?`.
pub fn build_url_with_uid(base: &str, uid: Option<&Uid>) -> String {
    match uid {
        Some(uid) => {
            let sep = if base.contains('?') { '&' } else { '?' };
            format!("{}{}uid={}", base, sep, uid.to_hex())
        }
        None => base.to_string(),
    }
}

/// Card counters owned by the caller's session loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionTally {
    pub processed: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl SessionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one card and classify it by `outcome`.
    pub fn record<T>(&mut self, outcome: &Result<T>) {
        self.processed += 1;
        match outcome {
            Ok(_) => self.succeeded += 1,
            Err(e) => {
                self.failed += 1;
                warn!("card {} failed: {}", self.processed, e);
            }
        }
    }
}
