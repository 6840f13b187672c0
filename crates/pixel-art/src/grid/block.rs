//! Block geometry shared by the cropper and the averager.

use crate::api::ConfigError;

/// Size of one pixelation block and the replication factor applied to each
/// averaged block in reduced-resolution output.
///
/// Construct with [`BlockConfig::new`] or [`BlockConfig::square`]; both
/// reject zero-sized blocks and a zero scaling factor, so a `BlockConfig`
/// in hand is always valid.
///
/// # Example
///
/// ```
/// use pixel_art::BlockConfig;
///
/// let block = BlockConfig::new(8, 4, 2).unwrap();
/// assert_eq!(block.width(), 8);
/// assert_eq!(block.height(), 4);
/// assert_eq!(block.scaling(), 2);
///
/// assert!(BlockConfig::new(0, 4, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockConfig {
    width: u32,
    height: u32,
    scaling: u32,
}

impl BlockConfig {
    /// Create a block configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroBlockWidth`] / [`ConfigError::ZeroBlockHeight`]
    ///   if a block dimension is 0
    /// - [`ConfigError::InvalidScaling`] if `scaling` is 0
    pub fn new(width: u32, height: u32, scaling: u32) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroBlockWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroBlockHeight);
        }
        if scaling == 0 {
            return Err(ConfigError::InvalidScaling { scaling });
        }
        Ok(Self {
            width,
            height,
            scaling,
        })
    }

    /// Square blocks of `size × size` pixels.
    pub fn square(size: u32, scaling: u32) -> Result<Self, ConfigError> {
        Self::new(size, size, scaling)
    }

    /// Block width in source pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Block height in source pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Output pixels per axis for one block in reduced-resolution mode.
    #[inline]
    pub fn scaling(&self) -> u32 {
        self.scaling
    }

    /// Number of blocks needed to cover `width × height`, counting a
    /// trailing partial block on either axis as one.
    #[inline]
    pub fn grid_size(&self, width: u32, height: u32) -> (u32, u32) {
        (width.div_ceil(self.width), height.div_ceil(self.height))
    }
}
