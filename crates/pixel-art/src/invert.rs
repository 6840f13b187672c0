//! Color inversion stage.

use crate::bitmap::Bitmap;
use crate::color;

/// Invert the RGB channels of every pixel, keeping alpha.
///
/// ```
/// use pixel_art::{invert, Bitmap, Rgba};
///
/// let bitmap = Bitmap::filled(1, 1, Rgba::new(0, 100, 255, 9));
/// assert_eq!(invert(&bitmap).pixel(0, 0), Rgba::new(255, 155, 0, 9));
/// ```
pub fn invert(bitmap: &Bitmap) -> Bitmap {
    bitmap.map_pixels(color::invert)
}
