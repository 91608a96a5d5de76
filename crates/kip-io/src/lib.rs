#![deny(missing_docs)]
//! JPEG load/save boundary for kernel image processing

/// Error types for the io module.
pub mod error;

/// JPEG image encoding and decoding.
pub mod jpeg;

pub use crate::error::IoError;
pub use crate::jpeg::{read_image_jpeg_rgb8, write_image_jpeg_rgb8};
