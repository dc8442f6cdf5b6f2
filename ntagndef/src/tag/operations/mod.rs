pub mod page;
pub mod read;
pub mod uid;
pub mod write;

// Re-export the operations at the operations root so callers can use
// `crate::tag::operations::read_page(...)` directly.
pub use page::{read_page, write_page};
pub use read::{read_message, read_ndef_payload, read_tlv_buffer};
pub use uid::read_uid;
pub use write::{write_message, write_tlv_frame};
