use log::debug;

use crate::constants::PAGE_SIZE;
use crate::ndef::NdefMessage;
use crate::protocol::tlv::build_frame;
use crate::tag::TagConfig;
use crate::tag::operations::page::write_page;
use crate::transport::Transport;
use crate::types::Page;
use crate::{Error, Result};

/// Frame `payload` as an NDEF Message TLV and write it from
/// `config.first_page` onwards. Returns the number of pages written.
///
/// Size checks happen before the first transmit, so an oversized message
/// never leaves a half-written tag behind.
///
/// The reader stops at the first page holding 0xFE, so a payload of exactly
/// 254 bytes (LEN byte 0xFE) or one with 0xFE inside its leading pages is
/// written fine but reads back as `MalformedFrame`.
pub fn write_tlv_frame(
    transport: &mut dyn Transport,
    config: &TagConfig,
    payload: &[u8],
) -> Result<usize> {
    config.validate()?;
    let frame = build_frame(payload)?;
    let pages = frame.len() / PAGE_SIZE;
    if pages > config.max_pages {
        return Err(Error::OversizedMessage {
            actual: payload.len(),
        });
    }

    for (index, chunk) in frame.chunks_exact(PAGE_SIZE).enumerate() {
        let page = config.page_at(index)?;
        let data = Page::try_from(chunk)?;
        debug!("writing page {}: {}", page, data.to_hex());
        write_page(transport, page, &data)?;
    }

    debug!("wrote {} bytes in {} pages", frame.len(), pages);
    Ok(pages)
}

/// Encode `message` and write it to the tag.
pub fn write_message(
    transport: &mut dyn Transport,
    config: &TagConfig,
    message: &NdefMessage,
) -> Result<usize> {
    let payload = message.encode()?;
    write_tlv_frame(transport, config, &payload)
}
