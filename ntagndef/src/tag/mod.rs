// ntagndef/src/tag/mod.rs

use crate::Result;
use crate::ndef::NdefMessage;
use crate::transport::Transport;
use crate::types::{Page, Uid};

mod config;
pub use config::TagConfig;

pub mod builder;
pub mod operations;

pub use builder::TagBuilder;

/// An NTAG21x tag reached through some [`Transport`]. The tag only holds
/// the page window; every operation borrows the transport it runs on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    config: TagConfig,
}

impl Tag {
    pub fn new(config: TagConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn read_page(&self, transport: &mut dyn Transport, page: u8) -> Result<Page> {
        operations::read_page(transport, page)
    }

    pub fn write_page(&self, transport: &mut dyn Transport, page: u8, data: &Page) -> Result<()> {
        operations::write_page(transport, page, data)
    }

    /// Page bytes up to and including the page holding the terminator.
    pub fn read_raw(&self, transport: &mut dyn Transport) -> Result<Vec<u8>> {
        operations::read_tlv_buffer(transport, &self.config)
    }

    /// Value of the NDEF Message TLV.
    pub fn read_payload(&self, transport: &mut dyn Transport) -> Result<Vec<u8>> {
        operations::read_ndef_payload(transport, &self.config)
    }

    pub fn read_message(&self, transport: &mut dyn Transport) -> Result<NdefMessage> {
        operations::read_message(transport, &self.config)
    }

    /// Write an already encoded NDEF message. Returns the pages written.
    pub fn write_payload(&self, transport: &mut dyn Transport, payload: &[u8]) -> Result<usize> {
        operations::write_tlv_frame(transport, &self.config, payload)
    }

    pub fn write_message(
        &self,
        transport: &mut dyn Transport,
        message: &NdefMessage,
    ) -> Result<usize> {
        operations::write_message(transport, &self.config, message)
    }

    pub fn read_uid(&self, transport: &mut dyn Transport) -> Result<Uid> {
        operations::read_uid(transport)
    }
}
