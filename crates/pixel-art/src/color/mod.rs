//! Pixel type and color arithmetic
//!
//! All color handling is plain 8-bit RGBA. Averaging, distance and
//! inversion are free functions with no state.
//!
//! # Example
//!
//! ```
//! use pixel_art::color::{distance, invert};
//! use pixel_art::Rgba;
//!
//! let teal = Rgba::opaque(0, 128, 128);
//! assert_eq!(invert(teal), Rgba::opaque(255, 127, 127));
//! assert_eq!(distance(teal, teal), 0);
//! ```

mod math;
mod rgba;

pub use math::{average, distance, invert, ChannelSum};
pub use rgba::Rgba;
