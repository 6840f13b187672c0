//! Trim a bitmap so whole blocks tile it.

use std::borrow::Cow;

use super::block::BlockConfig;
use crate::bitmap::Bitmap;

/// Largest `(width, height)` not exceeding the inputs that are multiples of
/// the block dimensions.
///
/// If a block dimension is larger than the bitmap on that axis, the axis is
/// left at its full size instead of collapsing to zero.
///
/// ```
/// use pixel_art::{crop_dimensions, BlockConfig};
///
/// let block = BlockConfig::square(4, 1).unwrap();
/// assert_eq!(crop_dimensions(10, 9, &block), (8, 8));
/// assert_eq!(crop_dimensions(3, 9, &block), (3, 8));
/// ```
pub fn crop_dimensions(width: u32, height: u32, block: &BlockConfig) -> (u32, u32) {
    (
        crop_axis(width, block.width()),
        crop_axis(height, block.height()),
    )
}

#[inline]
fn crop_axis(len: u32, block: u32) -> u32 {
    if block > len {
        return len;
    }
    len - len % block
}

/// Crop `bitmap` to the block grid.
///
/// Returns `Cow::Borrowed(bitmap)` when nothing needs trimming, otherwise a
/// new bitmap holding the top-left `crop_dimensions` sub-rectangle. Pixels
/// outside that rectangle are never read.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use pixel_art::{crop_to_grid, Bitmap, BlockConfig, Rgba};
///
/// let block = BlockConfig::square(2, 1).unwrap();
///
/// let even = Bitmap::filled(4, 4, Rgba::opaque(1, 2, 3));
/// assert!(matches!(crop_to_grid(&even, &block), Cow::Borrowed(_)));
///
/// let odd = Bitmap::filled(5, 3, Rgba::opaque(1, 2, 3));
/// let cropped = crop_to_grid(&odd, &block);
/// assert_eq!(cropped.dimensions(), (4, 2));
/// ```
pub fn crop_to_grid<'a>(bitmap: &'a Bitmap, block: &BlockConfig) -> Cow<'a, Bitmap> {
    let (width, height) = crop_dimensions(bitmap.width(), bitmap.height(), block);

    if (width, height) == bitmap.dimensions() {
        return Cow::Borrowed(bitmap);
    }

    Cow::Owned(Bitmap::from_fn(width, height, |x, y| bitmap.pixel(x, y)))
}

/// True when [`crop_to_grid`] would return a new, smaller bitmap.
pub fn needs_crop(bitmap: &Bitmap, block: &BlockConfig) -> bool {
    crop_dimensions(bitmap.width(), bitmap.height(), block) != bitmap.dimensions()
}
