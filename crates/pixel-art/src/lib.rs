#![allow(clippy::module_inception)]

//! pixel-art: block-averaged pixel-art derivatives of RGBA bitmaps
//!
//! This library turns a decoded bitmap into a "pixel-art" version of itself.
//! It performs no I/O: callers hand in a [`Bitmap`] and a
//! [`RunConfiguration`] and get back in-memory bitmaps.
//!
//! # Quick Start
//!
//! The [`Pipeline`] is the primary entry point:
//!
//! ```
//! use pixel_art::{Bitmap, Pipeline, Rgba, RunConfiguration};
//!
//! let config = RunConfiguration {
//!     block_width: 2,
//!     block_height: 2,
//!     quantize: true,
//!     ..RunConfiguration::default()
//! };
//! let pipeline = Pipeline::new(config).unwrap();
//!
//! let bitmap = Bitmap::filled(5, 4, Rgba::opaque(250, 10, 10));
//! let output = pipeline.run(bitmap).unwrap();
//!
//! // 5x4 is cropped to 4x4, then each 2x2 block becomes one pixel.
//! assert_eq!(output.final_bitmap().dimensions(), (2, 2));
//! assert_eq!(output.final_bitmap().pixel(0, 0), Rgba::opaque(255, 0, 0));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! Bitmap (decoded by the caller)
//!     |
//!     v
//! [crop_to_grid]     trim right/bottom remainder; borrows when nothing to trim
//!     |
//!     v
//! [pixelate]         average each block (same size, or reduced x scaling)
//!     |                                            --> artifact "pixelated"
//!     v
//! [quantize]         nearest palette entry by RGB distance, first wins ties
//!     |                                            --> artifact "palette_applied"
//!     v
//! [invert]           255 - channel for R, G, B; alpha kept
//!     |                                            --> artifact "inversion_applied"
//!     v
//! final Bitmap
//! ```
//!
//! Each of the last three steps can be switched off; a disabled step passes
//! its input through untouched. Steps always read the output of the step
//! before them, never the original input.
//!
//! # Numerics
//!
//! - Block averages use `u64` channel sums and truncating division, so a
//!   2-pixel block of 0 and 255 averages to 127.
//! - Distance is `sqrt(dR² + dG² + dB²)` truncated to an integer. Alpha is
//!   not part of the distance. Truncation can turn near-ties into exact
//!   ties, which the earlier palette entry wins.
//! - Quantization writes the palette entry's alpha, not the source alpha.

pub mod api;
pub mod bitmap;
pub mod color;
pub mod grid;
pub mod invert;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use api::{
    process, Artifact, ConfigError, Pipeline, PipelineOutput, PipelineState, PixelArtError,
    RunConfiguration, Stage,
};
pub use bitmap::Bitmap;
pub use color::Rgba;
pub use grid::{
    crop_dimensions, crop_to_grid, pixelate, BlockConfig, PixelateMode, PixelateOptions,
};
pub use invert::invert;
pub use palette::{quantize, Palette, PaletteError, ParseColorError};
