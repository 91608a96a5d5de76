//! Filter operations
//!
//! This module provides kernel construction and convolution for image
//! processing.

/// Filter kernel container
mod kernel;
pub use kernel::Kernel;

/// Filter kernel constructors
pub mod kernels;
pub use kernels::KernelKind;

/// Convolution engine
mod convolution;
pub use convolution::*;
