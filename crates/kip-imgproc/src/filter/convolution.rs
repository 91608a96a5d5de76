use kip_image::{Image, ImageSize};

use super::Kernel;
use crate::error::FilterError;

const MIN_CHANNEL_VALUE: f32 = 0.0;
const MAX_CHANNEL_VALUE: f32 = 255.0;

/// Clamp an accumulated channel value to the 8-bit display range and
/// truncate it to an integer.
#[inline]
fn channel_as_u8(channel: f32) -> u8 {
    if channel < MIN_CHANNEL_VALUE {
        return MIN_CHANNEL_VALUE as u8;
    }
    if channel > MAX_CHANNEL_VALUE {
        return MAX_CHANNEL_VALUE as u8;
    }
    channel as u8
}

/// Apply a kernel to an image via 2D cross-correlation.
///
/// The kernel is applied as-is, not flipped. The output shrinks to
/// `(width - order + 1) x (height - order + 1)`; callers that want to
/// preserve the input dimensions pre-extend the image with
/// [`crate::padding::extend_edge`] by `(order - 1) / 2` pixels. Channel sums
/// are accumulated in `f32` independently for red, green and blue, then
/// clamped to `[0, 255]`. The engine applies no normalization of its own;
/// energy preservation is the kernel's concern.
///
/// The cost is proportional to `width * height * order²`, which dominates
/// the runtime for large images.
///
/// # Errors
///
/// Returns [`FilterError::KernelExceedsImage`] when the kernel is larger
/// than the image in either dimension.
///
/// # Examples
///
/// ```
/// use kip_image::{Image, ImageSize, Pixel};
/// use kip_imgproc::filter::{convolve, kernels};
///
/// let image = Image::from_size_val(
///     ImageSize { width: 5, height: 5 },
///     Pixel::new(100, 100, 100),
/// );
///
/// let kernel = kernels::box_blur_kernel(3).unwrap();
/// let blurred = convolve(&image, &kernel).unwrap();
///
/// assert_eq!(blurred.width(), 3);
/// assert_eq!(blurred.height(), 3);
/// ```
pub fn convolve(src: &Image, kernel: &Kernel) -> Result<Image, FilterError> {
    let order = kernel.order();
    let width = src.width();
    let height = src.height();

    if order > width || order > height {
        return Err(FilterError::KernelExceedsImage {
            order,
            width,
            height,
        });
    }

    let weights = kernel.weights();
    let src_reds = src.reds();
    let src_greens = src.greens();
    let src_blues = src.blues();

    let output_width = width - (order - 1);
    let output_height = height - (order - 1);
    let num_pixels = output_width * output_height;

    let mut reds = vec![0u8; num_pixels];
    let mut greens = vec![0u8; num_pixels];
    let mut blues = vec![0u8; num_pixels];

    for y in 0..output_height {
        for x in 0..output_width {
            let mut channel_red = 0.0f32;
            let mut channel_green = 0.0f32;
            let mut channel_blue = 0.0f32;

            for j in 0..order {
                for i in 0..order {
                    let pos = (y + j) * width + (x + i);
                    let weight = weights[j * order + i];
                    channel_red += f32::from(src_reds[pos]) * weight;
                    channel_green += f32::from(src_greens[pos]) * weight;
                    channel_blue += f32::from(src_blues[pos]) * weight;
                }
            }

            let out = y * output_width + x;
            reds[out] = channel_as_u8(channel_red);
            greens[out] = channel_as_u8(channel_green);
            blues[out] = channel_as_u8(channel_blue);
        }
    }

    let size = ImageSize {
        width: output_width,
        height: output_height,
    };

    Ok(Image::new(size, reds, greens, blues)?)
}
