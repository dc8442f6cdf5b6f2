use log::{debug, warn};

use crate::protocol::Command;
use crate::transport::Transport;
use crate::types::Uid;
use crate::{Error, Result};

/// Ask the reader for the UID of the tag in the field (`FF CA 00 00 00`).
pub fn read_uid(transport: &mut dyn Transport) -> Result<Uid> {
    let resp = transport.transmit(&Command::GetUid.encode())?;

    let sw = resp.status();
    if !sw.is_success() {
        warn!("uid read rejected with status {}", sw);
        return Err(Error::UidRejected {
            sw1: sw.sw1,
            sw2: sw.sw2,
        });
    }
    if resp.data().is_empty() {
        return Err(Error::InvalidLength {
            expected: 1,
            actual: 0,
        });
    }

    let uid = Uid::from_bytes(resp.data());
    debug!("tag uid {}", uid);
    Ok(uid)
}
