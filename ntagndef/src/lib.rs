// ntagndef/src/lib.rs

//! ntagndef
//!
//! Read and write NDEF messages on NTAG21x tags through a PC/SC reader.
//!
//! The page-level work goes through the [`transport::Transport`] trait so
//! the whole stack runs against [`transport::MockTag`] in tests and against
//! a real reader with the `pcsc` feature.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are reachable without the module path.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
