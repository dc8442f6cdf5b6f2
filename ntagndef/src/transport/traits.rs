// ntagndef/src/transport/traits.rs

use crate::Result;
use crate::protocol::ApduResponse;

/// Transport trait abstracts the reader connection away from the page and
/// frame logic. One implementation talks to PC/SC, the mocks replay
/// scripted responses or emulate tag memory.
pub trait Transport {
    /// Send one APDU and wait for the reader's answer. Implementations
    /// return `Err` only when no response could be obtained at all; a
    /// rejected command is an `Ok` response carrying a non-9000 status word.
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        (**self).transmit(apdu)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        (**self).transmit(apdu)
    }
}
