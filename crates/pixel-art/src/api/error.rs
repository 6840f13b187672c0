//! Unified error type for the pixel-art public API.
//!
//! [`PixelArtError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Invalid run configuration, detected before any pixel is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Block width was 0
    ZeroBlockWidth,
    /// Block height was 0
    ZeroBlockHeight,
    /// Scaling factor below 1
    InvalidScaling {
        /// The rejected value
        scaling: u32,
    },
    /// Quantization enabled with no palette colors
    EmptyPalette,
    /// Scaled output would not fit in a bitmap
    OutputTooLarge {
        /// Requested output width
        width: u64,
        /// Requested output height
        height: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBlockWidth => write!(f, "block width must be greater than 0"),
            ConfigError::ZeroBlockHeight => write!(f, "block height must be greater than 0"),
            ConfigError::InvalidScaling { scaling } => {
                write!(f, "scaling must be at least 1, got {}", scaling)
            }
            ConfigError::EmptyPalette => {
                write!(f, "palette quantization is enabled but the palette is empty")
            }
            ConfigError::OutputTooLarge { width, height } => write!(
                f,
                "scaled output of {}x{} pixels is too large; lower the scaling",
                width, height
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Unified error type for the pixel-art public API.
///
/// # Example
///
/// ```
/// use pixel_art::{Palette, PixelArtError};
///
/// fn create_palette() -> Result<Palette, PixelArtError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PixelArtError {
    /// Run configuration rejected before processing
    Configuration(ConfigError),
    /// A stage produced a bitmap whose size disagrees with the block grid.
    /// Indicates a bug in stage composition, not bad input.
    DimensionMismatch {
        /// Stage that produced the bitmap
        stage: &'static str,
        /// Expected `(width, height)`
        expected: (u32, u32),
        /// Actual `(width, height)`
        actual: (u32, u32),
    },
    /// A pixel buffer's length does not match the declared dimensions
    BufferLength {
        /// `width * height` (or `* 4` for raw bytes)
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// Palette validation error
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
}

impl PixelArtError {
    /// True for errors caused by the run configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PixelArtError::Configuration(_))
    }
}

impl fmt::Display for PixelArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelArtError::Configuration(err) => write!(f, "configuration error: {}", err),
            PixelArtError::DimensionMismatch {
                stage,
                expected,
                actual,
            } => write!(
                f,
                "{} stage produced {}x{}, expected {}x{}",
                stage, actual.0, actual.1, expected.0, expected.1
            ),
            PixelArtError::BufferLength { expected, actual } => write!(
                f,
                "pixel buffer has {} elements, dimensions require {}",
                actual, expected
            ),
            PixelArtError::Palette(err) => write!(f, "palette error: {}", err),
            PixelArtError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for PixelArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PixelArtError::Configuration(err) => Some(err),
            PixelArtError::Palette(err) => Some(err),
            PixelArtError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for PixelArtError {
    fn from(err: ConfigError) -> Self {
        PixelArtError::Configuration(err)
    }
}

impl From<PaletteError> for PixelArtError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::EmptyPalette => PixelArtError::Configuration(ConfigError::EmptyPalette),
            other => PixelArtError::Palette(other),
        }
    }
}

impl From<ParseColorError> for PixelArtError {
    fn from(err: ParseColorError) -> Self {
        PixelArtError::ParseColor(err)
    }
}
