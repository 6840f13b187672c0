//! Snap every pixel of a bitmap to its nearest palette entry.

use super::palette::Palette;
use crate::bitmap::Bitmap;

/// Replace each pixel with the closest [`Palette`] entry.
///
/// The chosen entry is written verbatim, alpha included, so the output only
/// ever contains palette colors. Ties go to the entry listed first.
///
/// # Example
///
/// ```
/// use pixel_art::{quantize, Bitmap, Palette, Rgba};
///
/// let palette = Palette::new(&[Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]).unwrap();
/// let bitmap = Bitmap::filled(2, 2, Rgba::new(30, 40, 50, 7));
///
/// let out = quantize(&bitmap, &palette);
/// assert_eq!(out.pixel(0, 0), Rgba::opaque(0, 0, 0));
/// ```
pub fn quantize(bitmap: &Bitmap, palette: &Palette) -> Bitmap {
    bitmap.map_pixels(|p| palette.nearest_color(p))
}
