#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the processing operations.
pub mod error;

/// image filtering module.
pub mod filter;

/// spatial padding module.
pub mod padding;

pub use crate::error::FilterError;
