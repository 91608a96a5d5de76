use crate::error::ImageError;
use crate::pixel::Pixel;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use kip_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels in an image of this size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an 8-bit RGB image with pixel data stored as channel planes.
///
/// The pixel data is held as three row-major planes (red, green, blue), each
/// of length `width * height`. The image is immutable once constructed; every
/// transformation produces a new `Image`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: ImageSize,
    reds: Vec<u8>,
    greens: Vec<u8>,
    blues: Vec<u8>,
}

impl Image {
    /// Create a new image from its channel planes.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `reds` - The red channel values, row-major.
    /// * `greens` - The green channel values, row-major.
    /// * `blues` - The blue channel values, row-major.
    ///
    /// # Errors
    ///
    /// If the length of any plane does not match the image size, an error is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use kip_image::{Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize { width: 2, height: 2 },
    ///     vec![0u8; 4],
    ///     vec![0u8; 4],
    ///     vec![0u8; 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.height(), 2);
    /// ```
    pub fn new(
        size: ImageSize,
        reds: Vec<u8>,
        greens: Vec<u8>,
        blues: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let num_pixels = size.num_pixels();
        for plane in [&reds, &greens, &blues] {
            if plane.len() != num_pixels {
                return Err(ImageError::InvalidChannelLength(plane.len(), num_pixels));
            }
        }

        Ok(Self {
            size,
            reds,
            greens,
            blues,
        })
    }

    /// Create a new image with the given size, filled with one pixel value.
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Self {
        let num_pixels = size.num_pixels();
        Self {
            size,
            reds: vec![val.r; num_pixels],
            greens: vec![val.g; num_pixels],
            blues: vec![val.b; num_pixels],
        }
    }

    /// Create a new image from row-major pixels.
    ///
    /// # Errors
    ///
    /// If the number of pixels does not match the image size, an error is
    /// returned.
    pub fn from_pixels(size: ImageSize, pixels: &[Pixel]) -> Result<Self, ImageError> {
        let num_pixels = size.num_pixels();
        if pixels.len() != num_pixels {
            return Err(ImageError::InvalidChannelLength(pixels.len(), num_pixels));
        }

        let mut reds = Vec::with_capacity(num_pixels);
        let mut greens = Vec::with_capacity(num_pixels);
        let mut blues = Vec::with_capacity(num_pixels);
        for px in pixels {
            reds.push(px.r);
            greens.push(px.g);
            blues.push(px.b);
        }

        Ok(Self {
            size,
            reds,
            greens,
            blues,
        })
    }

    /// Create a new image from interleaved rgb8 data, row-major.
    ///
    /// This is the wire format external codecs produce: three channels per
    /// pixel, one byte per channel.
    ///
    /// # Errors
    ///
    /// If the data length does not match `width * height * 3`, an error is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use kip_image::{Image, ImageSize, Pixel};
    ///
    /// let image = Image::from_interleaved(
    ///     ImageSize { width: 2, height: 1 },
    ///     &[1, 2, 3, 4, 5, 6],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 0).unwrap(), Pixel::new(4, 5, 6));
    /// ```
    pub fn from_interleaved(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        let num_pixels = size.num_pixels();
        if data.len() != num_pixels * 3 {
            return Err(ImageError::InvalidInterleavedLength(
                data.len(),
                num_pixels * 3,
            ));
        }

        let mut reds = Vec::with_capacity(num_pixels);
        let mut greens = Vec::with_capacity(num_pixels);
        let mut blues = Vec::with_capacity(num_pixels);
        for rgb in data.chunks_exact(3) {
            reds.push(rgb[0]);
            greens.push(rgb[1]);
            blues.push(rgb[2]);
        }

        Ok(Self {
            size,
            reds,
            greens,
            blues,
        })
    }

    /// Copy the pixel data out as interleaved rgb8 bytes, row-major.
    pub fn to_interleaved(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.size.num_pixels() * 3);
        for ((&r, &g), &b) in self
            .reds
            .iter()
            .zip(self.greens.iter())
            .zip(self.blues.iter())
        {
            data.extend_from_slice(&[r, g, b]);
        }
        data
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        3
    }

    /// Get the red channel plane, row-major.
    pub fn reds(&self) -> &[u8] {
        &self.reds
    }

    /// Get the green channel plane, row-major.
    pub fn greens(&self) -> &[u8] {
        &self.greens
    }

    /// Get the blue channel plane, row-major.
    pub fn blues(&self) -> &[u8] {
        &self.blues
    }

    /// Get the pixel at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - The column index of the pixel.
    /// * `y` - The row index of the pixel.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, ImageError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        let idx = y * self.size.width + x;
        Ok(Pixel {
            r: self.reds[idx],
            g: self.greens[idx],
            b: self.blues[idx],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageSize};
    use crate::error::ImageError;
    use crate::pixel::Pixel;

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.num_pixels(), 200);
        assert_eq!(image_size.to_string(), "10x20");
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20],
            vec![0u8; 10 * 20],
            vec![0u8; 10 * 20],
        )?;
        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_plane_length_mismatch() {
        let res = Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 4],
            vec![0u8; 3],
            vec![0u8; 4],
        );
        assert!(matches!(res, Err(ImageError::InvalidChannelLength(3, 4))));
    }

    #[test]
    fn image_from_size_val() {
        let image = Image::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            Pixel::new(7, 8, 9),
        );
        assert_eq!(image.reds(), &[7u8; 6]);
        assert_eq!(image.greens(), &[8u8; 6]);
        assert_eq!(image.blues(), &[9u8; 6]);
    }

    #[test]
    fn image_from_pixels() -> Result<(), ImageError> {
        let pixels = [Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)];
        let image = Image::from_pixels(
            ImageSize {
                width: 2,
                height: 1,
            },
            &pixels,
        )?;
        assert_eq!(image.reds(), &[1, 4]);
        assert_eq!(image.greens(), &[2, 5]);
        assert_eq!(image.blues(), &[3, 6]);

        Ok(())
    }

    #[test]
    fn image_interleaved_round_trip() -> Result<(), ImageError> {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let image = Image::from_interleaved(
            ImageSize {
                width: 2,
                height: 2,
            },
            &data,
        )?;
        assert_eq!(image.reds(), &[1, 4, 7, 10]);
        assert_eq!(image.to_interleaved(), data);

        Ok(())
    }

    #[test]
    fn image_interleaved_length_mismatch() {
        let res = Image::from_interleaved(
            ImageSize {
                width: 2,
                height: 2,
            },
            &[0u8; 11],
        );
        assert!(matches!(
            res,
            Err(ImageError::InvalidInterleavedLength(11, 12))
        ));
    }

    #[test]
    fn image_get_pixel() -> Result<(), ImageError> {
        let image = Image::from_interleaved(
            ImageSize {
                width: 2,
                height: 1,
            },
            &[1, 2, 3, 4, 5, 6],
        )?;
        assert_eq!(image.get_pixel(0, 0)?, Pixel::new(1, 2, 3));
        assert_eq!(image.get_pixel(1, 0)?, Pixel::new(4, 5, 6));
        assert!(matches!(
            image.get_pixel(2, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 1))
        ));

        Ok(())
    }
}
