use crate::constants::{INS_GET_DATA, PCSC_CLA};

/// Encode GET DATA for the card UID: `FF CA 00 00 00`. Le = 0 asks the
/// reader for the full identifier.
pub fn encode_get_uid() -> Vec<u8> {
    vec![PCSC_CLA, INS_GET_DATA, 0x00, 0x00, 0x00]
}
