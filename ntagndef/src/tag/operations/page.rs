use log::{trace, warn};

use crate::constants::PAGE_SIZE;
use crate::protocol::{ApduResponse, Command};
use crate::transport::Transport;
use crate::types::Page;
use crate::{Error, Result};

/// Send one page command and insist on a 9000 status word.
fn exchange(transport: &mut dyn Transport, cmd: Command, page: u8) -> Result<ApduResponse> {
    let apdu = cmd.encode();
    trace!(">> {}", crate::utils::bytes_to_hex_spaced(&apdu));

    let resp = transport.transmit(&apdu).map_err(|e| Error::PageIo {
        page,
        source: Box::new(e),
    })?;

    let sw = resp.status();
    if !sw.is_success() {
        warn!("page {} rejected with status {}", page, sw);
        return Err(Error::TransportFailure {
            page,
            sw1: sw.sw1,
            sw2: sw.sw2,
        });
    }
    Ok(resp)
}

/// Read one 4-byte page. Readers that return more than one page of data
/// (some answer with 16 bytes) are trimmed to the addressed page.
pub fn read_page(transport: &mut dyn Transport, page: u8) -> Result<Page> {
    let resp = exchange(transport, Command::ReadPage { page }, page)?;
    let data = resp.data();
    if data.len() < PAGE_SIZE {
        return Err(Error::InvalidLength {
            expected: PAGE_SIZE,
            actual: data.len(),
        });
    }
    Page::try_from(&data[..PAGE_SIZE])
}

/// Write one 4-byte page. Response data, if any, is ignored.
pub fn write_page(transport: &mut dyn Transport, page: u8, data: &Page) -> Result<()> {
    exchange(transport, Command::WritePage { page, data: *data }, page)?;
    Ok(())
}
