use pixel_art::{Palette, PixelateMode, Rgba, RunConfiguration};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Run settings loaded from a YAML file and/or the command line
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Block width in source pixels
    #[serde(default = "default_block_size")]
    pub pixel_width: u32,

    /// Block height in source pixels
    #[serde(default = "default_block_size")]
    pub pixel_height: u32,

    /// Reduced-mode replication factor
    #[serde(default = "default_scaling")]
    pub scaling: u32,

    /// Background pre-fill as a hex color
    #[serde(default = "default_background")]
    pub background: String,

    /// Quantization palette as hex colors
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Run the block averager
    #[serde(default = "default_true")]
    pub pixelise: bool,

    /// Run the palette quantizer
    #[serde(default)]
    pub apply_palette: bool,

    /// Run the inverter
    #[serde(default)]
    pub invert: bool,

    /// Pixelate in place instead of shrinking to one pixel per block
    #[serde(default)]
    pub keep_size: bool,
}

fn default_block_size() -> u32 {
    16
}

fn default_scaling() -> u32 {
    1
}

fn default_background() -> String {
    Rgba::TRANSPARENT.to_string()
}

fn default_palette() -> Vec<String> {
    Palette::default_pixel_art()
        .colors()
        .iter()
        .map(Rgba::to_string)
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pixel_width: default_block_size(),
            pixel_height: default_block_size(),
            scaling: default_scaling(),
            background: default_background(),
            palette: default_palette(),
            pixelise: true,
            apply_palette: false,
            invert: false,
            keep_size: false,
        }
    }
}

/// Command-line values layered on top of a [`RunConfig`].
///
/// `None` and `false` leave the underlying setting untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub pixel_size: Option<u32>,
    pub pixel_width: Option<u32>,
    pub pixel_height: Option<u32>,
    pub scaling: Option<u32>,
    pub background: Option<String>,
    pub palette: Option<Vec<String>>,
    pub no_pixelise: bool,
    pub apply_palette: bool,
    pub invert: bool,
    pub keep_size: bool,
}

impl RunConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load a YAML config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let config = Self::from_yaml_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            path = %path.display(),
            pixel_width = config.pixel_width,
            pixel_height = config.pixel_height,
            scaling = config.scaling,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Defaults, then the file at `path` if given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides. `pixel_size` sets both axes and the
    /// per-axis values win over it.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(size) = overrides.pixel_size {
            self.pixel_width = size;
            self.pixel_height = size;
        }
        if let Some(width) = overrides.pixel_width {
            self.pixel_width = width;
        }
        if let Some(height) = overrides.pixel_height {
            self.pixel_height = height;
        }
        if let Some(scaling) = overrides.scaling {
            self.scaling = scaling;
        }
        if let Some(background) = overrides.background {
            self.background = background;
        }
        if let Some(palette) = overrides.palette {
            self.palette = palette;
        }
        if overrides.no_pixelise {
            self.pixelise = false;
        }
        self.apply_palette |= overrides.apply_palette;
        self.invert |= overrides.invert;
        self.keep_size |= overrides.keep_size;
    }

    /// Resolve hex strings and build the core configuration.
    ///
    /// Numeric ranges are not checked here; [`pixel_art::Pipeline::new`]
    /// rejects zero block sizes and scaling.
    pub fn to_run_configuration(&self) -> Result<RunConfiguration, AppError> {
        let background: Rgba = self.background.parse().map_err(|e| {
            AppError::Config(format!("invalid background '{}': {}", self.background, e))
        })?;

        let palette = self
            .palette
            .iter()
            .enumerate()
            .map(|(index, hex)| {
                hex.parse::<Rgba>().map_err(|e| {
                    AppError::Config(format!("invalid palette entry {} '{}': {}", index, hex, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RunConfiguration {
            block_width: self.pixel_width,
            block_height: self.pixel_height,
            scaling: self.scaling,
            background,
            palette,
            mode: if self.keep_size {
                PixelateMode::SameSize
            } else {
                PixelateMode::Reduced
            },
            pixelate: self.pixelise,
            quantize: self.apply_palette,
            invert: self.invert,
        })
    }
}

/// Split a comma-separated palette argument into trimmed hex strings.
pub fn split_palette(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
