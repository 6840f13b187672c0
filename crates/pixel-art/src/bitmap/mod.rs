//! In-memory raster type shared by every stage.

mod bitmap;

pub use bitmap::Bitmap;
