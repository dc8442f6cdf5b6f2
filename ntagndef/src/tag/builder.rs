use crate::tag::{Tag, TagConfig};

/// Builder for [`Tag`]. Unset fields fall back to [`TagConfig::default`].
#[derive(Debug, Default)]
pub struct TagBuilder {
    first_page: Option<u8>,
    max_pages: Option<usize>,
}

impl TagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_page(mut self, page: u8) -> Self {
        self.first_page = Some(page);
        self
    }

    pub fn max_pages(mut self, pages: usize) -> Self {
        self.max_pages = Some(pages);
        self
    }

    pub fn build(self) -> crate::Result<Tag> {
        let defaults = TagConfig::default();
        Tag::new(TagConfig::new(
            self.first_page.unwrap_or(defaults.first_page),
            self.max_pages.unwrap_or(defaults.max_pages),
        ))
    }
}
