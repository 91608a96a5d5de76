//! Kernel image processing: convolution, padding and filter kernels for
//! 8-bit RGB images.

#[doc(inline)]
pub use kip_image as image;

#[doc(inline)]
pub use kip_imgproc as imgproc;

#[doc(inline)]
pub use kip_io as io;
