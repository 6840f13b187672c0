//! Owned RGBA raster.

use crate::api::PixelArtError;
use crate::color::Rgba;

/// A rectangular grid of [`Rgba`] pixels stored in row-major order.
///
/// A `Bitmap` is read-only once built: the public API offers no way to
/// change a pixel. Every pipeline stage reads one bitmap and allocates a
/// fresh one for its output.
///
/// # Example
///
/// ```
/// use pixel_art::{Bitmap, Rgba};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let bitmap = Bitmap::filled(4, 2, red);
///
/// assert_eq!(bitmap.width(), 4);
/// assert_eq!(bitmap.height(), 2);
/// assert_eq!(bitmap.pixel(3, 1), red);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// A bitmap with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// A bitmap of zero pixels (0, 0, 0, 0).
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Wrap an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PixelArtError::BufferLength`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, PixelArtError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(PixelArtError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved `[R, G, B, A, R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PixelArtError::BufferLength`] if `bytes.len()` is not
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, PixelArtError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(PixelArtError::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build by evaluating `f(x, y)` for every position in row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the bitmap has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the bitmap.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} bitmap",
            x,
            y,
            self.width,
            self.height
        );
        self.pixels[self.index(x, y)]
    }

    /// The pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Iterate rows top to bottom; each row is `width` pixels long.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        // chunks_exact panics on 0; a zero-width bitmap has no pixels anyway.
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Interleaved `[R, G, B, A, ...]` bytes, `width * height * 4` long.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            bytes.extend_from_slice(&p.to_bytes());
        }
        bytes
    }

    /// Consume the bitmap and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Apply `f` to every pixel, producing a new bitmap of the same size.
    pub(crate) fn map_pixels(&self, f: impl Fn(Rgba) -> Rgba) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Crate-internal writer used by stages while they build their output.
    #[inline]
    pub(crate) fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
