use log::debug;

use crate::constants::PAGE_SIZE;
use crate::ndef::NdefMessage;
use crate::protocol::tlv::extract_ndef;
use crate::tag::TagConfig;
use crate::tag::operations::page::read_page;
use crate::transport::Transport;
use crate::{Error, Result};

/// Read pages from `config.first_page` until one of them contains the TLV
/// terminator byte 0xFE, and return everything read.
///
/// Any failed page aborts the loop and the partial buffer is dropped. A tag
/// that shows no terminator within `config.max_pages` pages is reported as
/// `TerminatorNotFound`.
pub fn read_tlv_buffer(transport: &mut dyn Transport, config: &TagConfig) -> Result<Vec<u8>> {
    config.validate()?;
    let mut buffer = Vec::with_capacity(PAGE_SIZE * 16);

    for index in 0..config.max_pages {
        let page = config.page_at(index)?;
        let data = read_page(transport, page)?;
        debug!("page {}: {}", page, data.to_hex());
        buffer.extend_from_slice(data.as_bytes());

        if data.contains_terminator() {
            debug!("terminator found after {} pages", index + 1);
            return Ok(buffer);
        }
    }

    Err(Error::TerminatorNotFound {
        pages: config.max_pages,
    })
}

/// Read the tag and return the bytes of its NDEF Message TLV.
pub fn read_ndef_payload(transport: &mut dyn Transport, config: &TagConfig) -> Result<Vec<u8>> {
    let buffer = read_tlv_buffer(transport, config)?;
    let payload = extract_ndef(&buffer)?;
    debug!(
        "ndef payload ({} bytes): {}",
        payload.len(),
        crate::utils::bytes_to_hex(payload)
    );
    Ok(payload.to_vec())
}

/// Read and decode the NDEF message. A message without records is
/// reported as `NoRecords` rather than as an empty success.
pub fn read_message(transport: &mut dyn Transport, config: &TagConfig) -> Result<NdefMessage> {
    let payload = read_ndef_payload(transport, config)?;
    let message = NdefMessage::decode(&payload)?;
    if message.is_empty() {
        return Err(Error::NoRecords);
    }
    Ok(message)
}
