//! Utilities for ntagndef: small, reusable helpers used across the crate.
//!
//! Currently only hex formatting, used for log output and for rendering tag
//! UIDs into URLs.

pub mod hex;

// Re-export the helpers at the `utils` module level so callers can use
// `crate::utils::bytes_to_hex(...)` directly.
pub use hex::*;
