//! Palette types and quantization
//!
//! This module provides the [`Palette`] type, its error types, and the
//! per-pixel [`quantize`] stage that snaps a bitmap onto a palette.

mod error;
mod palette;
mod quantize;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
pub use quantize::quantize;
