// ntagndef/src/ndef/mod.rs

//! NDEF message codec. Records of type `U` decode to [`UriRecord`]; every
//! other record is kept as an [`OpaqueRecord`] so a message can be read and
//! written back without loss.

pub mod codec;
pub mod header;
pub mod message;
pub mod record;
pub mod uri;

pub use codec::{RawRecord, decode_message, encode_message};
pub use header::{RecordHeader, TypeNameFormat};
pub use message::NdefMessage;
pub use record::{NdefRecord, OpaqueRecord, UriRecord};
