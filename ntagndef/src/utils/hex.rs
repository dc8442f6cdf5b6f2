//! Hexadecimal helpers used for logging and UID rendering.
//!
//! Compact lowercase output is used in log lines, uppercase compact output is
//! what the write path embeds into URLs, and the spaced form mirrors how
//! APDU traces are usually printed.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0x04, 0xa1]` -> `"04A1"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to an uppercase hex string with a single space
/// between each byte.
///
/// Example: `&[0xff, 0xb0]` -> `"FF B0"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace. Returns an error message
/// string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
