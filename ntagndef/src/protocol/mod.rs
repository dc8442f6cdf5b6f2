// ntagndef/src/protocol/mod.rs

pub mod commands;
pub mod parser;
pub mod response;
pub mod tlv;

pub use commands::*;
pub use response::ApduResponse;
pub use tlv::{build_frame, extract_ndef};
