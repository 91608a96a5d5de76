use kip_image::ImageError;

/// An error type for kernel construction and convolution.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Error when the kernel order is even, so no center cell exists.
    #[error("Kernel order must be odd, got {0}")]
    EvenKernelOrder(usize),

    /// Error when the weight buffer does not hold `order * order` values.
    #[error("Kernel weights length ({0}) does not match order squared ({1})")]
    InvalidWeightsLength(usize, usize),

    /// Error when the kernel is larger than the image in some dimension.
    #[error("Kernel of order {order} exceeds image size {width}x{height}")]
    KernelExceedsImage {
        /// Order of the rejected kernel.
        order: usize,
        /// Width of the source image.
        width: usize,
        /// Height of the source image.
        height: usize,
    },

    /// Error coming from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}
