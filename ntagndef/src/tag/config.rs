use crate::constants::{DEFAULT_MAX_PAGES, FIRST_USER_PAGE};
use crate::{Error, Result};

/// Where the NDEF area starts and how many pages a read or write may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TagConfig {
    pub first_page: u8,
    pub max_pages: usize,
}

impl TagConfig {
    pub fn new(first_page: u8, max_pages: usize) -> Self {
        Self {
            first_page,
            max_pages,
        }
    }

    /// Check that the page window starts in user memory, is not empty and
    /// stays addressable with a one-byte page number.
    pub fn validate(&self) -> Result<()> {
        if self.first_page < FIRST_USER_PAGE {
            return Err(Error::InvalidConfig(format!(
                "first_page {} is inside the header pages",
                self.first_page
            )));
        }
        if self.max_pages == 0 {
            return Err(Error::InvalidConfig("max_pages must be at least 1".into()));
        }
        if self.max_pages > u8::MAX as usize + 1 - self.first_page as usize {
            return Err(Error::InvalidConfig(format!(
                "{} pages from page {} run past page 255",
                self.max_pages, self.first_page
            )));
        }
        Ok(())
    }

    /// Address of the `index`-th page of the window.
    pub fn page_at(&self, index: usize) -> Result<u8> {
        let page = self.first_page as usize + index;
        u8::try_from(page).map_err(|_| Error::PageOverflow {
            page: u8::MAX,
        })
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self::new(FIRST_USER_PAGE, DEFAULT_MAX_PAGES)
    }
}
