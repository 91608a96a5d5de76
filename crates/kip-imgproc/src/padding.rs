use kip_image::{Image, ImageError, ImageSize, Pixel};

/// A border policy for spatial padding.
#[derive(Debug, Clone, Copy)]
pub enum PaddingMode {
    /// This border type fills the border with a single, constant pixel value.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant(Pixel),

    /// This border type takes the outermost row or column of pixels and repeats it into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// This border type reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// This border type reflects the pixel values at the boundary, starting with the edge pixel itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,

    /// This border type wraps the content from the opposite side to fill the border.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl PaddingMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i - 1;
            } else if i >= len {
                i = 2 * len - i - 1;
            }
        }
        i as usize
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i;
            } else if i >= len {
                i = 2 * len - i - 2;
            }
        }
        i as usize
    }

    #[inline]
    fn wrap(i: isize, len: usize) -> usize {
        ((i % len as isize + len as isize) % len as isize) as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the padding mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Wrap`: circular wrap
    /// - `Constant`: returns 0 (not used directly)
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension.
    ///
    /// # Returns
    /// A valid mapped index within `[0, len)`.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> usize {
        match self {
            PaddingMode::Replicate => i.clamp(0, len as isize - 1) as usize,
            PaddingMode::Reflect => Self::reflect(i, len),
            PaddingMode::Reflect101 => Self::reflect101(i, len),
            PaddingMode::Wrap => Self::wrap(i, len),
            PaddingMode::Constant(_) => 0,
        }
    }
}

/// Pad one channel plane symmetrically by `padding` pixels per side.
///
/// The original plane lands centered; the border is resolved through
/// `map_index` against the original coordinate range, except for constant
/// padding where the prefilled value stays in place.
fn pad_plane(
    src: &[u8],
    old_width: usize,
    old_height: usize,
    padding: usize,
    mode: PaddingMode,
    fill: u8,
) -> Vec<u8> {
    let new_width = old_width + 2 * padding;
    let new_height = old_height + 2 * padding;

    let mut plane = vec![fill; new_width * new_height];

    // copy the original rows into the centered region
    let row_offset = padding * new_width + padding;
    for (src_row, dst_row) in src
        .chunks_exact(old_width)
        .zip(plane[row_offset..].chunks_mut(new_width))
    {
        dst_row[..old_width].copy_from_slice(src_row);
    }

    if let PaddingMode::Constant(_) = mode {
        return plane;
    }

    // left and right bands of the center rows; must come before the
    // top/bottom copies so the corner blocks inherit the mapped columns
    for y in 0..old_height {
        let row_start = (y + padding) * new_width;
        for x in 0..padding {
            let src_x = mode.map_index(x as isize - padding as isize, old_width);
            plane[row_start + x] = plane[row_start + padding + src_x];
        }
        for x in (new_width - padding)..new_width {
            let src_x = mode.map_index(x as isize - padding as isize, old_width);
            plane[row_start + x] = plane[row_start + padding + src_x];
        }
    }

    // top and bottom bands as whole-row copies
    for y in 0..padding {
        let src_y = mode.map_index(y as isize - padding as isize, old_height);
        let src_start = (src_y + padding) * new_width;
        plane.copy_within(src_start..src_start + new_width, y * new_width);
    }
    for y in (new_height - padding)..new_height {
        let src_y = mode.map_index(y as isize - padding as isize, old_height);
        let src_start = (src_y + padding) * new_width;
        plane.copy_within(src_start..src_start + new_width, y * new_width);
    }

    plane
}

/// Produce a padded copy of an image.
///
/// The output is `(width + 2 * padding) x (height + 2 * padding)` with the
/// original image occupying the centered region and the border filled
/// according to `mode`. A `padding` of zero yields a content-identical but
/// distinct image.
///
/// # Errors
///
/// Construction of the padded image can only fail on a plane-length
/// mismatch, which cannot happen for planes produced here; the `Result`
/// mirrors the image constructor.
///
/// # Examples
///
/// ```
/// use kip_image::{Image, ImageSize, Pixel};
/// use kip_imgproc::padding::{pad, PaddingMode};
///
/// let src = Image::from_size_val(
///     ImageSize { width: 2, height: 2 },
///     Pixel::new(1, 1, 1),
/// );
///
/// let dst = pad(&src, 1, PaddingMode::Replicate).unwrap();
/// assert_eq!(dst.width(), 4);
/// assert_eq!(dst.height(), 4);
/// ```
pub fn pad(src: &Image, padding: usize, mode: PaddingMode) -> Result<Image, ImageError> {
    let fill = match mode {
        PaddingMode::Constant(px) => px,
        _ => Pixel::default(),
    };

    let width = src.width();
    let height = src.height();

    let reds = pad_plane(src.reds(), width, height, padding, mode, fill.r);
    let greens = pad_plane(src.greens(), width, height, padding, mode, fill.g);
    let blues = pad_plane(src.blues(), width, height, padding, mode, fill.b);

    let size = ImageSize {
        width: width + 2 * padding,
        height: height + 2 * padding,
    };

    Image::new(size, reds, greens, blues)
}

/// Extend the edges of an image by replicating its border pixels.
///
/// The standard preparation step before a convolution with a kernel of order
/// `2 * padding + 1`: the duplicated real pixel values avoid the artificial
/// darkening a zero border would introduce near the image edges.
///
/// # Errors
///
/// See [`pad`].
pub fn extend_edge(src: &Image, padding: usize) -> Result<Image, ImageError> {
    pad(src, padding, PaddingMode::Replicate)
}
