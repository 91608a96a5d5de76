/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when a channel plane length does not match the image size.
    #[error("Channel data length ({0}) does not match the image size ({1})")]
    InvalidChannelLength(usize, usize),

    /// Error when interleaved rgb data length does not match the image size.
    #[error("Interleaved data length ({0}) does not match the image size ({1})")]
    InvalidInterleavedLength(usize, usize),

    /// Error when a pixel coordinate is out of bounds.
    #[error("Pixel coordinate ({0}, {1}) out of bounds for image of size {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}
