// ntagndef/src/transport/pcsc.rs

#![cfg(feature = "pcsc")]

use std::ffi::CString;

use log::{debug, trace};
use ::pcsc::{Card, Context, MAX_BUFFER_SIZE, Protocols, Scope, ShareMode};

use crate::protocol::ApduResponse;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// PC/SC transport over an already connected card. It is feature-gated
/// behind `--features pcsc` and requires the `pcsc` crate plus a running
/// PC/SC service (pcscd on Linux).
pub struct PcscTransport {
    card: Card,
    reader: Option<CString>,
}

impl PcscTransport {
    /// Wrap a card connection opened by the caller (for example from its own
    /// card-presence loop).
    pub fn new(card: Card) -> Self {
        Self { card, reader: None }
    }

    /// Establish a user-scope context and connect to the card on the first
    /// reader that reports one.
    pub fn connect_first() -> Result<Self> {
        let ctx = Context::establish(Scope::User)?;
        let readers = ctx.list_readers_owned()?;
        let reader = readers.into_iter().next().ok_or(Error::ReaderNotFound)?;
        debug!("connecting to reader {:?}", reader);
        Self::connect(&ctx, reader)
    }

    /// Connect to the card present on `reader`.
    pub fn connect(ctx: &Context, reader: CString) -> Result<Self> {
        let card = ctx.connect(&reader, ShareMode::Shared, Protocols::ANY)?;
        Ok(Self {
            card,
            reader: Some(reader),
        })
    }

    /// Name of the reader this transport was connected through, if known.
    pub fn reader(&self) -> Option<&CString> {
        self.reader.as_ref()
    }

    pub fn into_inner(self) -> Card {
        self.card
    }
}

impl Transport for PcscTransport {
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        let mut buf = [0u8; MAX_BUFFER_SIZE];
        trace!("pcsc >> {}", crate::utils::bytes_to_hex_spaced(apdu));
        let raw = self.card.transmit(apdu, &mut buf)?;
        trace!("pcsc << {}", crate::utils::bytes_to_hex_spaced(raw));
        ApduResponse::from_raw(raw)
    }
}
