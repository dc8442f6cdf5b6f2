// ntagndef/src/ndef/record.rs

use std::fmt;

use crate::constants::NDEF_TYPE_URI;
use crate::ndef::header::TypeNameFormat;
use crate::ndef::uri;
use crate::{Error, Result};

/// A decoded NDEF record. URI records are understood; everything else is
/// carried through untouched as `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NdefRecord {
    Uri(UriRecord),
    Opaque(OpaqueRecord),
}

impl NdefRecord {
    /// Shorthand for a URI record without identifier.
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(UriRecord::new(uri))
    }

    pub fn tnf(&self) -> TypeNameFormat {
        match self {
            Self::Uri(_) => TypeNameFormat::WellKnown,
            Self::Opaque(r) => r.tnf,
        }
    }

    pub fn record_type(&self) -> &[u8] {
        match self {
            Self::Uri(_) => NDEF_TYPE_URI,
            Self::Opaque(r) => &r.record_type,
        }
    }

    pub fn id(&self) -> Option<&[u8]> {
        match self {
            Self::Uri(r) => r.id.as_deref(),
            Self::Opaque(r) => r.id.as_deref(),
        }
    }

    /// Payload bytes as they appear on the wire.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Self::Uri(r) => r.payload(),
            Self::Opaque(r) => r.payload.clone(),
        }
    }

    pub fn as_uri(&self) -> Option<&UriRecord> {
        match self {
            Self::Uri(r) => Some(r),
            Self::Opaque(_) => None,
        }
    }

    /// Build the typed record for a fully reassembled wire record.
    pub(crate) fn from_parts(
        tnf: TypeNameFormat,
        record_type: Vec<u8>,
        id: Option<Vec<u8>>,
        payload: Vec<u8>,
    ) -> Result<Self> {
        if tnf == TypeNameFormat::WellKnown && record_type == NDEF_TYPE_URI {
            return Ok(Self::Uri(UriRecord::from_payload(&payload, id)?));
        }
        Ok(Self::Opaque(OpaqueRecord {
            tnf,
            record_type,
            id,
            payload,
        }))
    }
}

impl From<UriRecord> for NdefRecord {
    fn from(r: UriRecord) -> Self {
        Self::Uri(r)
    }
}

impl From<OpaqueRecord> for NdefRecord {
    fn from(r: OpaqueRecord) -> Self {
        Self::Opaque(r)
    }
}

impl fmt::Display for NdefRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(r) => write!(f, "URI {}", r.uri),
            Self::Opaque(r) => write!(
                f,
                "{:?} type '{}' ({} byte payload)",
                r.tnf,
                String::from_utf8_lossy(&r.record_type),
                r.payload.len()
            ),
        }
    }
}

/// Well-known URI record (type `U`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UriRecord {
    uri: String,
    id: Option<Vec<u8>>,
}

impl UriRecord {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<Vec<u8>>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn id(&self) -> Option<&[u8]> {
        self.id.as_deref()
    }

    /// Identifier code chosen when encoding.
    pub fn prefix_code(&self) -> u8 {
        uri::abbreviate(&self.uri).0
    }

    /// Part of the URI stored after the identifier code.
    pub fn suffix(&self) -> &str {
        uri::abbreviate(&self.uri).1
    }

    /// Identifier code followed by the UTF-8 suffix.
    pub fn payload(&self) -> Vec<u8> {
        let (code, suffix) = uri::abbreviate(&self.uri);
        let mut out = Vec::with_capacity(1 + suffix.len());
        out.push(code);
        out.extend_from_slice(suffix.as_bytes());
        out
    }

    pub fn from_payload(payload: &[u8], id: Option<Vec<u8>>) -> Result<Self> {
        let (&code, suffix) = payload
            .split_first()
            .ok_or_else(|| Error::Decode("uri record has an empty payload".into()))?;
        Ok(Self {
            uri: uri::expand(code, suffix)?,
            id,
        })
    }
}

/// Any record this crate does not interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpaqueRecord {
    pub tnf: TypeNameFormat,
    pub record_type: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl OpaqueRecord {
    pub fn new(tnf: TypeNameFormat, record_type: &[u8], payload: &[u8]) -> Self {
        Self {
            tnf,
            record_type: record_type.to_vec(),
            id: None,
            payload: payload.to_vec(),
        }
    }
}
