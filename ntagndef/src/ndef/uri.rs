// ntagndef/src/ndef/uri.rs

//! URI identifier codes of the NFC Forum URI record type.

use crate::{Error, Result};

/// Prefix abbreviated by each identifier code; the index is the code byte.
pub const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Pick the identifier code with the longest prefix of `uri` and return it
/// with the remaining suffix. Equal lengths keep the lowest code.
pub fn abbreviate(uri: &str) -> (u8, &str) {
    let mut best = 0usize;
    for (code, prefix) in URI_PREFIXES.iter().enumerate().skip(1) {
        if uri.starts_with(prefix) && prefix.len() > URI_PREFIXES[best].len() {
            best = code;
        }
    }
    (best as u8, &uri[URI_PREFIXES[best].len()..])
}

/// Rebuild the full URI from an identifier code and its suffix bytes.
pub fn expand(code: u8, suffix: &[u8]) -> Result<String> {
    let prefix = URI_PREFIXES
        .get(code as usize)
        .ok_or_else(|| Error::Decode(format!("unknown uri identifier code {:#04x}", code)))?;
    let suffix = std::str::from_utf8(suffix)
        .map_err(|e| Error::Decode(format!("uri is not valid utf-8: {}", e)))?;
    Ok(format!("{}{}", prefix, suffix))
}
