// ntagndef/src/prelude.rs

pub use crate::ndef::{NdefMessage, NdefRecord, OpaqueRecord, TypeNameFormat, UriRecord};
pub use crate::protocol::{ApduResponse, Command};
pub use crate::session::{
    SessionTally, WriteReport, build_url_with_uid, handle_read_session, handle_write_session,
};
pub use crate::tag::{Tag, TagBuilder, TagConfig};
pub use crate::transport::Transport;
pub use crate::{Error, Page, Result, StatusWord, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
