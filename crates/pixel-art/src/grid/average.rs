//! Block averaging ("pixelation").
//!
//! The bitmap is cut into non-overlapping blocks, visited row-major from the
//! top-left. Each block is folded into a [`ChannelSum`] and replaced by its
//! mean color, either in place ([`PixelateMode::SameSize`]) or as a single
//! output pixel replicated `scaling × scaling` times
//! ([`PixelateMode::Reduced`]).

use super::block::BlockConfig;
use crate::api::ConfigError;
use crate::bitmap::Bitmap;
use crate::color::{ChannelSum, Rgba};

/// Where averaged blocks are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelateMode {
    /// One output pixel per block (times `scaling` per axis).
    #[default]
    Reduced,
    /// Output keeps the input size; every pixel of a block gets the block
    /// average. Scaling is not applied in this mode.
    SameSize,
}

/// Options for [`pixelate`].
///
/// # Example
///
/// ```
/// use pixel_art::{BlockConfig, PixelateMode, PixelateOptions, Rgba};
///
/// let options = PixelateOptions::new(BlockConfig::square(8, 2).unwrap())
///     .mode(PixelateMode::SameSize)
///     .background(Rgba::opaque(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelateOptions {
    /// Block geometry and scaling.
    pub block: BlockConfig,
    /// Output layout.
    pub mode: PixelateMode,
    /// Pre-fill color for the output buffer. Ignored when its alpha is 0.
    pub background: Rgba,
}

impl PixelateOptions {
    /// Reduced-resolution output with no background fill.
    pub fn new(block: BlockConfig) -> Self {
        Self {
            block,
            mode: PixelateMode::default(),
            background: Rgba::TRANSPARENT,
        }
    }

    /// Set the output mode.
    #[inline]
    pub fn mode(mut self, mode: PixelateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the background pre-fill color.
    #[inline]
    pub fn background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Size of the bitmap [`pixelate`] produces for a `width × height` input.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutputTooLarge`] when the scaled grid does not fit in
    /// `u32` per axis or its pixel buffer would exceed `isize::MAX` bytes.
    pub fn output_dimensions(&self, width: u32, height: u32) -> Result<(u32, u32), ConfigError> {
        let (cols, rows) = match self.mode {
            PixelateMode::SameSize => return Ok((width, height)),
            PixelateMode::Reduced => self.block.grid_size(width, height),
        };
        let s = u64::from(self.block.scaling());
        let (w, h) = (u64::from(cols) * s, u64::from(rows) * s);

        let too_large = ConfigError::OutputTooLarge {
            width: w,
            height: h,
        };
        let bytes = w
            .checked_mul(h)
            .and_then(|n| n.checked_mul(std::mem::size_of::<Rgba>() as u64));
        match (u32::try_from(w), u32::try_from(h), bytes) {
            (Ok(w), Ok(h), Some(bytes)) if bytes <= isize::MAX as u64 => Ok((w, h)),
            _ => Err(too_large),
        }
    }
}

/// Replace every block of `bitmap` with its average color.
///
/// The input is normally already cropped to the block grid (see
/// [`crop_to_grid`](crate::crop_to_grid)). If it is not, a trailing partial
/// block is averaged over the pixels it actually covers.
///
/// Blocks always cover the whole output, so the background pre-fill never
/// shows through. It is retained only for parity with the run
/// configuration.
///
/// # Errors
///
/// [`ConfigError::OutputTooLarge`] if the output size overflows (see
/// [`PixelateOptions::output_dimensions`]). Nothing is allocated then.
///
/// # Example
///
/// ```
/// use pixel_art::{pixelate, Bitmap, BlockConfig, PixelateOptions, Rgba};
///
/// let bitmap = Bitmap::from_fn(4, 4, |x, _| {
///     if x < 2 { Rgba::opaque(0, 0, 0) } else { Rgba::opaque(200, 200, 200) }
/// });
/// let options = PixelateOptions::new(BlockConfig::square(2, 1).unwrap());
/// let out = pixelate(&bitmap, &options).unwrap();
///
/// assert_eq!(out.dimensions(), (2, 2));
/// assert_eq!(out.pixel(1, 0), Rgba::opaque(200, 200, 200));
/// ```
pub fn pixelate(bitmap: &Bitmap, options: &PixelateOptions) -> Result<Bitmap, ConfigError> {
    let (width, height) = bitmap.dimensions();
    let block = options.block;
    let (cols, rows) = block.grid_size(width, height);
    let (out_w, out_h) = options.output_dimensions(width, height)?;

    let fill = if options.background.is_transparent() {
        Rgba::TRANSPARENT
    } else {
        options.background
    };
    let mut output = Bitmap::filled(out_w, out_h, fill);

    for by in 0..rows {
        let y0 = by * block.height();
        let y1 = y0.saturating_add(block.height()).min(height);

        for bx in 0..cols {
            let x0 = bx * block.width();
            let x1 = x0.saturating_add(block.width()).min(width);

            let color = block_average(bitmap, x0, x1, y0, y1);

            match options.mode {
                PixelateMode::SameSize => {
                    for y in y0..y1 {
                        for x in x0..x1 {
                            output.set(x, y, color);
                        }
                    }
                }
                PixelateMode::Reduced => {
                    let s = block.scaling();
                    let (ox, oy) = (bx * s, by * s);
                    for sy in 0..s {
                        for sx in 0..s {
                            output.set(ox + sx, oy + sy, color);
                        }
                    }
                }
            }
        }
    }

    Ok(output)
}

/// Mean of the pixels in `[x0, x1) × [y0, y1)`.
fn block_average(bitmap: &Bitmap, x0: u32, x1: u32, y0: u32, y1: u32) -> Rgba {
    let stride = bitmap.width() as usize;
    let pixels = bitmap.pixels();
    let mut sum = ChannelSum::new();

    for y in y0..y1 {
        let row = y as usize * stride;
        sum.extend(
            pixels[row + x0 as usize..row + x1 as usize]
                .iter()
                .copied(),
        );
    }

    sum.mean()
}
