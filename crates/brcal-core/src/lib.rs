//! # brcal-core
//!
//! Error definitions shared by every crate in the brcal workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
