// ntagndef/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The reader or tag answered a page command with a non-9000 status.
    #[error("page {page} rejected: status=({sw1:#04x}, {sw2:#04x})")]
    TransportFailure { page: u8, sw1: u8, sw2: u8 },

    /// The transmit call itself failed while handling `page`.
    #[error("page {page}: transmit failed: {source}")]
    PageIo {
        page: u8,
        #[source]
        source: Box<Error>,
    },

    #[error("uid read rejected: status=({sw1:#04x}, {sw2:#04x})")]
    UidRejected { sw1: u8, sw2: u8 },

    #[error("malformed tlv frame: {0}")]
    MalformedFrame(String),

    #[error("no tlv terminator within {pages} pages")]
    TerminatorNotFound { pages: usize },

    #[error("ndef decode error: {0}")]
    Decode(String),

    #[error("ndef encode error: {0}")]
    Encode(String),

    #[error("ndef message too large: {actual} bytes")]
    OversizedMessage { actual: usize },

    #[error("no ndef records found")]
    NoRecords,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("page address overflow after page {page}")]
    PageOverflow { page: u8 },

    #[error("invalid tag configuration: {0}")]
    InvalidConfig(String),

    #[error("no pc/sc reader found")]
    ReaderNotFound,

    #[error("operation timed out")]
    Timeout,

    // PC/SC 実装は feature で後から有効化できるようにしている
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[cfg(not(feature = "pcsc"))]
    #[error("pcsc error: {0}")]
    PcscString(String),
}

impl Error {
    /// Page that failed, for errors raised by the page loop.
    pub fn page(&self) -> Option<u8> {
        match self {
            Self::TransportFailure { page, .. }
            | Self::PageIo { page, .. }
            | Self::PageOverflow { page } => Some(*page),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
