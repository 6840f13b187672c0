//! Block grid: geometry, cropping and averaging
//!
//! The grid stages run in this order inside the pipeline:
//!
//! 1. [`crop_to_grid`] trims the right and bottom remainder so whole blocks
//!    tile the bitmap.
//! 2. [`pixelate`] averages each block and writes the result at full or
//!    reduced resolution.

mod average;
mod block;
mod crop;

pub use average::{pixelate, PixelateMode, PixelateOptions};
pub use block::BlockConfig;
pub use crop::{crop_dimensions, crop_to_grid, needs_crop};
