// ntagndef/src/ndef/codec.rs

//! Wire format of NDEF records:
//! [Flags(1)] [TypeLen(1)] [PayloadLen(1 if SR, else 4 BE)] [IdLen(1) if IL]
//! [Type] [Id] [Payload]

use log::trace;

use crate::ndef::header::{RecordHeader, TypeNameFormat};
use crate::ndef::record::NdefRecord;
use crate::protocol::parser::{be_u32_at, byte_at, slice_at};
use crate::{Error, Result};

/// One record as it appears on the wire, before chunk reassembly or type
/// interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub header: RecordHeader,
    pub record_type: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl RawRecord {
    /// Parse one record from the start of `data`. Returns the record and
    /// the number of bytes it occupied.
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let header = RecordHeader::from_byte(byte_at(data, 0)?);
        let type_len = byte_at(data, 1)? as usize;

        let mut pos = 2;
        let payload_len = if header.short_record {
            let n = byte_at(data, pos)? as usize;
            pos += 1;
            n
        } else {
            let n = be_u32_at(data, pos)? as usize;
            pos += 4;
            n
        };
        let id_len = if header.has_id_length {
            let n = byte_at(data, pos)? as usize;
            pos += 1;
            Some(n)
        } else {
            None
        };

        let record_type = slice_at(data, pos, type_len)?.to_vec();
        pos += type_len;
        let id = match id_len {
            Some(n) => {
                let id = slice_at(data, pos, n)?.to_vec();
                pos += n;
                Some(id)
            }
            None => None,
        };
        let payload = slice_at(data, pos, payload_len)?.to_vec();
        pos += payload_len;

        Ok((
            Self {
                header,
                record_type,
                id,
                payload,
            },
            pos,
        ))
    }

    /// Append the wire encoding of this record to `out`. The short-record and
    /// id-length flags are derived from the contents.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        let type_len = u8::try_from(self.record_type.len()).map_err(|_| {
            Error::Encode(format!("record type is {} bytes", self.record_type.len()))
        })?;
        let id_len = self
            .id
            .as_ref()
            .map(|id| {
                u8::try_from(id.len())
                    .map_err(|_| Error::Encode(format!("record id is {} bytes", id.len())))
            })
            .transpose()?;
        let payload_len = u32::try_from(self.payload.len()).map_err(|_| {
            Error::Encode(format!("record payload is {} bytes", self.payload.len()))
        })?;

        let header = RecordHeader {
            short_record: payload_len <= u8::MAX as u32,
            has_id_length: id_len.is_some(),
            ..self.header
        };

        out.push(header.to_byte());
        out.push(type_len);
        if header.short_record {
            out.push(payload_len as u8);
        } else {
            out.extend_from_slice(&payload_len.to_be_bytes());
        }
        if let Some(n) = id_len {
            out.push(n);
        }
        out.extend_from_slice(&self.record_type);
        if let Some(id) = &self.id {
            out.extend_from_slice(id);
        }
        out.extend_from_slice(&self.payload);
        Ok(())
    }
}

/// Decode an NDEF message into its records.
///
/// Parsing stops at the record flagged message-end or when the bytes run
/// out, whichever comes first. Chunked records are joined back into one
/// record. An empty input is a valid message with no records.
pub fn decode_message(data: &[u8]) -> Result<Vec<NdefRecord>> {
    let mut records = Vec::new();
    let mut pending: Option<RawRecord> = None;
    let mut offset = 0usize;

    while offset < data.len() {
        let (raw, used) = RawRecord::parse(&data[offset..])?;
        trace!(
            "ndef record at {}: flags={:#04x} type={:?} payload={} bytes",
            offset,
            raw.header.to_byte(),
            String::from_utf8_lossy(&raw.record_type),
            raw.payload.len()
        );
        offset += used;
        let message_end = raw.header.message_end;

        match pending.take() {
            None if raw.header.tnf == TypeNameFormat::Unchanged => {
                return Err(Error::Decode(
                    "unchanged type name format outside a chunked record".into(),
                ));
            }
            None if raw.header.chunked => pending = Some(raw),
            None => records.push(NdefRecord::from_parts(
                raw.header.tnf,
                raw.record_type,
                raw.id,
                raw.payload,
            )?),
            Some(mut head) => {
                if raw.header.tnf != TypeNameFormat::Unchanged
                    || !raw.record_type.is_empty()
                    || raw.id.is_some()
                {
                    return Err(Error::Decode(
                        "chunk continuation must use the unchanged type name format".into(),
                    ));
                }
                head.payload.extend_from_slice(&raw.payload);
                if raw.header.chunked {
                    pending = Some(head);
                } else {
                    records.push(NdefRecord::from_parts(
                        head.header.tnf,
                        head.record_type,
                        head.id,
                        head.payload,
                    )?);
                }
            }
        }

        if message_end {
            break;
        }
    }

    if pending.is_some() {
        return Err(Error::Decode("message ends inside a chunked record".into()));
    }
    Ok(records)
}

/// Encode records into an NDEF message, flagging the first record
/// message-begin and the last one message-end.
pub fn encode_message(records: &[NdefRecord]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let last = records.len().saturating_sub(1);

    for (i, record) in records.iter().enumerate() {
        let tnf = record.tnf();
        if tnf == TypeNameFormat::Unchanged {
            return Err(Error::Encode(
                "unchanged type name format is only valid inside chunks".into(),
            ));
        }
        let raw = RawRecord {
            header: RecordHeader {
                message_begin: i == 0,
                message_end: i == last,
                chunked: false,
                short_record: false,
                has_id_length: false,
                tnf,
            },
            record_type: record.record_type().to_vec(),
            id: record.id().map(<[u8]>::to_vec),
            payload: record.payload(),
        };
        raw.write_to(&mut out)?;
    }

    Ok(out)
}
