// ntagndef/src/transport/mock.rs

use crate::constants::{
    FIRST_USER_PAGE, INS_GET_DATA, INS_READ_BINARY, INS_UPDATE_BINARY, PAGE_SIZE, PCSC_CLA,
};
use crate::protocol::ApduResponse;
use crate::transport::traits::Transport;
use crate::types::StatusWord;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent APDUs and returns queued
/// raw responses (data followed by SW1 SW2).
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            responses: Vec::new(),
        }
    }

    /// Queue a raw response, status word included.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue `data` followed by 90 00.
    pub fn push_ok(&mut self, data: &[u8]) {
        let mut resp = data.to_vec();
        resp.extend_from_slice(&crate::constants::SW_SUCCESS);
        self.responses.push(resp);
    }

    /// Queue a bare status word with no data.
    pub fn push_status(&mut self, sw1: u8, sw2: u8) {
        self.responses.push(vec![sw1, sw2]);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        self.sent.push(apdu.to_vec());
        if self.responses.is_empty() {
            // Nothing queued behaves like a card that went away.
            Err(Error::Timeout)
        } else {
            ApduResponse::from_raw(&self.responses.remove(0))
        }
    }
}

/// Memory-backed NTAG21x emulation. Understands the three pseudo-APDUs the
/// crate issues and answers them from `memory`, so tests can write a frame
/// and read it back through the same page loop.
#[derive(Debug, Clone)]
pub struct MockTag {
    pub memory: Vec<u8>,
    pub uid: Vec<u8>,
    pub sent: Vec<Vec<u8>>,
    /// Pages that answer with the given status word instead of data.
    pub faults: Vec<(u8, StatusWord)>,
    /// Number of transmits served before the tag "leaves the field".
    pub removed_after: Option<usize>,
}

impl MockTag {
    /// NTAG213: 45 pages.
    pub const NTAG213_PAGES: usize = 45;
    /// NTAG215: 135 pages.
    pub const NTAG215_PAGES: usize = 135;
    /// NTAG216: 231 pages.
    pub const NTAG216_PAGES: usize = 231;

    pub fn new(pages: usize, uid: &[u8]) -> Self {
        Self {
            memory: vec![0u8; pages * PAGE_SIZE],
            uid: uid.to_vec(),
            sent: Vec::new(),
            faults: Vec::new(),
            removed_after: None,
        }
    }

    pub fn ntag215(uid: &[u8]) -> Self {
        Self::new(Self::NTAG215_PAGES, uid)
    }

    pub fn ntag216(uid: &[u8]) -> Self {
        Self::new(Self::NTAG216_PAGES, uid)
    }

    /// Copy `bytes` into user memory starting at page 4.
    pub fn with_user_data(mut self, bytes: &[u8]) -> Self {
        let start = FIRST_USER_PAGE as usize * PAGE_SIZE;
        let end = (start + bytes.len()).min(self.memory.len());
        self.memory[start..end].copy_from_slice(&bytes[..end - start]);
        self
    }

    /// Make every access to `page` answer with `sw1 sw2`.
    pub fn fail_page(mut self, page: u8, sw1: u8, sw2: u8) -> Self {
        self.faults.push((page, StatusWord::new(sw1, sw2)));
        self
    }

    /// Serve `n` transmits, then fail every following one with `Timeout`.
    pub fn remove_after(mut self, n: usize) -> Self {
        self.removed_after = Some(n);
        self
    }

    pub fn page_count(&self) -> usize {
        self.memory.len() / PAGE_SIZE
    }

    /// User memory from page 4 to the end of the tag.
    pub fn user_data(&self) -> &[u8] {
        &self.memory[FIRST_USER_PAGE as usize * PAGE_SIZE..]
    }

    fn fault_for(&self, page: u8) -> Option<StatusWord> {
        self.faults
            .iter()
            .find(|(p, _)| *p == page)
            .map(|(_, sw)| *sw)
    }

    fn page_range(&self, page: u8) -> Option<std::ops::Range<usize>> {
        let start = page as usize * PAGE_SIZE;
        let end = start + PAGE_SIZE;
        (end <= self.memory.len()).then_some(start..end)
    }

    fn respond(&mut self, apdu: &[u8]) -> ApduResponse {
        const WRONG_P1P2: StatusWord = StatusWord::new(0x6A, 0x82);
        const WRONG_LENGTH: StatusWord = StatusWord::new(0x67, 0x00);
        const INS_UNSUPPORTED: StatusWord = StatusWord::new(0x6D, 0x00);

        if apdu.len() < 5 || apdu[0] != PCSC_CLA {
            return ApduResponse::new(Vec::new(), StatusWord::new(0x6E, 0x00));
        }
        let (ins, page, lc) = (apdu[1], apdu[3], apdu[4]);

        match ins {
            INS_READ_BINARY => {
                if let Some(sw) = self.fault_for(page) {
                    return ApduResponse::new(Vec::new(), sw);
                }
                match self.page_range(page) {
                    Some(r) => ApduResponse::new(self.memory[r].to_vec(), StatusWord::SUCCESS),
                    None => ApduResponse::new(Vec::new(), WRONG_P1P2),
                }
            }
            INS_UPDATE_BINARY => {
                if let Some(sw) = self.fault_for(page) {
                    return ApduResponse::new(Vec::new(), sw);
                }
                if lc as usize != PAGE_SIZE || apdu.len() != 5 + PAGE_SIZE {
                    return ApduResponse::new(Vec::new(), WRONG_LENGTH);
                }
                match self.page_range(page) {
                    Some(r) => {
                        self.memory[r].copy_from_slice(&apdu[5..]);
                        ApduResponse::new(Vec::new(), StatusWord::SUCCESS)
                    }
                    None => ApduResponse::new(Vec::new(), WRONG_P1P2),
                }
            }
            INS_GET_DATA if self.uid.is_empty() => {
                ApduResponse::new(Vec::new(), StatusWord::new(0x6A, 0x81))
            }
            INS_GET_DATA => ApduResponse::new(self.uid.clone(), StatusWord::SUCCESS),
            _ => ApduResponse::new(Vec::new(), INS_UNSUPPORTED),
        }
    }
}

impl Transport for MockTag {
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        if let Some(n) = self.removed_after {
            if self.sent.len() >= n {
                return Err(Error::Timeout);
            }
        }
        self.sent.push(apdu.to_vec());
        Ok(self.respond(apdu))
    }
}
