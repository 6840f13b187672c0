//! Pipeline -- the primary entry point for the crate.
//!
//! [`Pipeline`] validates a [`RunConfiguration`] once and then runs the
//! crop → pixelate → quantize → invert chain over any number of bitmaps.

use std::borrow::Cow;
use std::fmt;

use super::error::{ConfigError, PixelArtError};
use crate::bitmap::Bitmap;
use crate::color::Rgba;
use crate::grid::{crop_to_grid, pixelate, BlockConfig, PixelateMode, PixelateOptions};
use crate::invert::invert;
use crate::palette::{quantize, Palette};

/// Everything a run needs, passed explicitly to [`Pipeline::new`].
///
/// # Defaults
///
/// - 16×16 blocks, scaling 1, reduced-resolution output
/// - transparent background (no pre-fill)
/// - the ten-color [`Palette::default_pixel_art`] palette
/// - pixelation on, quantization and inversion off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Block width in source pixels (must be > 0).
    pub block_width: u32,
    /// Block height in source pixels (must be > 0).
    pub block_height: u32,
    /// Reduced-mode replication factor (must be ≥ 1).
    pub scaling: u32,
    /// Pre-fill for the pixelation output; alpha 0 disables it.
    pub background: Rgba,
    /// Quantization palette; must be non-empty when `quantize` is set.
    pub palette: Vec<Rgba>,
    /// Same-size or reduced-resolution pixelation.
    pub mode: PixelateMode,
    /// Run the block averager.
    pub pixelate: bool,
    /// Run the palette quantizer.
    pub quantize: bool,
    /// Run the inverter.
    pub invert: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            block_width: 16,
            block_height: 16,
            scaling: 1,
            background: Rgba::TRANSPARENT,
            palette: Palette::default_pixel_art().colors().to_vec(),
            mode: PixelateMode::Reduced,
            pixelate: true,
            quantize: false,
            invert: false,
        }
    }
}

/// A transformation step that can emit an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Block averaging
    Pixelated,
    /// Palette quantization
    Quantized,
    /// Color inversion
    Inverted,
}

impl Stage {
    /// File-friendly name used when the artifact is persisted.
    pub fn artifact_name(self) -> &'static str {
        match self {
            Stage::Pixelated => "pixelated",
            Stage::Quantized => "palette_applied",
            Stage::Inverted => "inversion_applied",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.artifact_name())
    }
}

/// Pipeline progress. Each state names the last step evaluated.
///
/// `Loaded → Cropped → Pixelated → Quantized → Inverted → Done`. Disabled
/// steps are still visited but leave the bitmap untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Loaded,
    Cropped,
    Pixelated,
    Quantized,
    Inverted,
    Done,
}

impl PipelineState {
    /// The following state, or `None` once `Done`.
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Loaded => Some(PipelineState::Cropped),
            PipelineState::Cropped => Some(PipelineState::Pixelated),
            PipelineState::Pixelated => Some(PipelineState::Quantized),
            PipelineState::Quantized => Some(PipelineState::Inverted),
            PipelineState::Inverted => Some(PipelineState::Done),
            PipelineState::Done => None,
        }
    }
}

/// Output of one enabled stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Stage that produced the bitmap
    pub stage: Stage,
    /// The stage's output
    pub bitmap: Bitmap,
}

impl Artifact {
    /// Shorthand for `self.stage.artifact_name()`.
    pub fn name(&self) -> &'static str {
        self.stage.artifact_name()
    }
}

/// Result of [`Pipeline::run`].
///
/// Artifacts are stored in execution order. The final bitmap is the last
/// artifact, or the (possibly cropped) input when every stage was disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    source_dimensions: (u32, u32),
    cropped_dimensions: (u32, u32),
    artifacts: Vec<Artifact>,
    passthrough: Option<Bitmap>,
}

impl PipelineOutput {
    /// Size of the bitmap handed to [`Pipeline::run`].
    pub fn source_dimensions(&self) -> (u32, u32) {
        self.source_dimensions
    }

    /// Size after cropping to the block grid.
    pub fn cropped_dimensions(&self) -> (u32, u32) {
        self.cropped_dimensions
    }

    /// True when the crop step removed rows or columns.
    pub fn was_cropped(&self) -> bool {
        self.source_dimensions != self.cropped_dimensions
    }

    /// Artifacts of every stage that ran, in order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Artifact for `stage`, if that stage ran.
    pub fn artifact(&self, stage: Stage) -> Option<&Bitmap> {
        self.artifacts
            .iter()
            .find(|a| a.stage == stage)
            .map(|a| &a.bitmap)
    }

    /// The bitmap at the end of the pipeline.
    pub fn final_bitmap(&self) -> &Bitmap {
        match (&self.passthrough, self.artifacts.last()) {
            (Some(bitmap), _) => bitmap,
            (None, Some(artifact)) => &artifact.bitmap,
            (None, None) => unreachable!("pipeline output always holds a bitmap"),
        }
    }

    /// Consume the output, returning the final bitmap.
    pub fn into_final(mut self) -> Bitmap {
        match self.passthrough.take() {
            Some(bitmap) => bitmap,
            None => self
                .artifacts
                .pop()
                .map(|a| a.bitmap)
                .unwrap_or_else(|| unreachable!("pipeline output always holds a bitmap")),
        }
    }

    /// Consume the output, returning artifacts and the final bitmap
    /// separately. The final bitmap is cloned from the last artifact.
    pub fn into_parts(self) -> (Vec<Artifact>, Bitmap) {
        let last = self.final_bitmap().clone();
        (self.artifacts, last)
    }
}

/// The configured transformation chain.
///
/// # Design
///
/// - Constructor validates the whole configuration (no invalid states)
/// - [`run()`](Self::run) takes `&self` so a pipeline is **reusable**
///   across multiple bitmaps
/// - Every stage reads the previous stage's output and allocates its own
///
/// # Example
///
/// ```
/// use pixel_art::{Bitmap, Pipeline, Rgba, RunConfiguration};
///
/// let config = RunConfiguration {
///     block_width: 2,
///     block_height: 2,
///     ..RunConfiguration::default()
/// };
/// let pipeline = Pipeline::new(config).unwrap();
///
/// let red = Rgba::opaque(255, 0, 0);
/// let output = pipeline.run(Bitmap::filled(4, 4, red)).unwrap();
///
/// assert_eq!(output.final_bitmap().dimensions(), (2, 2));
/// assert!(output.final_bitmap().pixels().iter().all(|&p| p == red));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    block: BlockConfig,
    pixelate: Option<PixelateOptions>,
    palette: Option<Palette>,
    invert: bool,
}

impl Pipeline {
    /// Validate `config` and build a pipeline.
    ///
    /// # Errors
    ///
    /// [`PixelArtError::Configuration`] for a zero block dimension, a zero
    /// scaling factor, or an empty palette with quantization enabled.
    pub fn new(config: RunConfiguration) -> Result<Self, PixelArtError> {
        let block = BlockConfig::new(config.block_width, config.block_height, config.scaling)?;

        let palette = if config.quantize {
            if config.palette.is_empty() {
                return Err(ConfigError::EmptyPalette.into());
            }
            Some(Palette::new(&config.palette)?)
        } else {
            None
        };

        let pixelate = config.pixelate.then(|| {
            PixelateOptions::new(block)
                .mode(config.mode)
                .background(config.background)
        });

        Ok(Self {
            block,
            pixelate,
            palette,
            invert: config.invert,
        })
    }

    /// Block geometry used for cropping and averaging.
    pub fn block(&self) -> BlockConfig {
        self.block
    }

    /// Stages that will emit artifacts, in execution order.
    pub fn enabled_stages(&self) -> Vec<Stage> {
        let mut stages = Vec::with_capacity(3);
        if self.pixelate.is_some() {
            stages.push(Stage::Pixelated);
        }
        if self.palette.is_some() {
            stages.push(Stage::Quantized);
        }
        if self.invert {
            stages.push(Stage::Inverted);
        }
        stages
    }

    /// Run every enabled stage over `bitmap`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutputTooLarge`] (as [`PixelArtError::Configuration`])
    /// if the scaling factor blows the reduced output past the addressable
    /// size. This is reported before the output is allocated.
    ///
    /// [`PixelArtError::DimensionMismatch`] if a stage's output size
    /// disagrees with the block grid. This indicates a defect in the crate,
    /// never a property of the input.
    pub fn run(&self, bitmap: Bitmap) -> Result<PipelineOutput, PixelArtError> {
        let source_dimensions = bitmap.dimensions();
        let mut base = bitmap;
        let mut artifacts: Vec<Artifact> = Vec::with_capacity(3);
        let mut state = PipelineState::Loaded;

        while let Some(next) = state.next() {
            match next {
                PipelineState::Cropped => {
                    let trimmed = match crop_to_grid(&base, &self.block) {
                        Cow::Owned(b) => Some(b),
                        Cow::Borrowed(_) => None,
                    };
                    if let Some(trimmed) = trimmed {
                        base = trimmed;
                    }
                }
                PipelineState::Pixelated => {
                    if let Some(options) = &self.pixelate {
                        let input = latest(&artifacts, &base);
                        let expected = options.output_dimensions(input.width(), input.height())?;
                        let out = pixelate(input, options)?;
                        check_dimensions(Stage::Pixelated, expected, &out)?;
                        artifacts.push(Artifact {
                            stage: Stage::Pixelated,
                            bitmap: out,
                        });
                    }
                }
                PipelineState::Quantized => {
                    if let Some(palette) = &self.palette {
                        let input = latest(&artifacts, &base);
                        let out = quantize(input, palette);
                        check_dimensions(Stage::Quantized, input.dimensions(), &out)?;
                        artifacts.push(Artifact {
                            stage: Stage::Quantized,
                            bitmap: out,
                        });
                    }
                }
                PipelineState::Inverted => {
                    if self.invert {
                        let input = latest(&artifacts, &base);
                        let out = invert(input);
                        check_dimensions(Stage::Inverted, input.dimensions(), &out)?;
                        artifacts.push(Artifact {
                            stage: Stage::Inverted,
                            bitmap: out,
                        });
                    }
                }
                PipelineState::Loaded | PipelineState::Done => {}
            }
            state = next;
        }

        let cropped_dimensions = base.dimensions();
        let passthrough = artifacts.is_empty().then_some(base);

        Ok(PipelineOutput {
            source_dimensions,
            cropped_dimensions,
            artifacts,
            passthrough,
        })
    }
}

/// Convenience wrapper: validate `config` and run it once over `bitmap`.
pub fn process(
    bitmap: Bitmap,
    config: &RunConfiguration,
) -> Result<PipelineOutput, PixelArtError> {
    Pipeline::new(config.clone())?.run(bitmap)
}

fn check_dimensions(
    stage: Stage,
    expected: (u32, u32),
    bitmap: &Bitmap,
) -> Result<(), PixelArtError> {
    if bitmap.dimensions() != expected {
        return Err(PixelArtError::DimensionMismatch {
            stage: stage.artifact_name(),
            expected,
            actual: bitmap.dimensions(),
        });
    }
    Ok(())
}

/// Input for the next stage: the newest artifact, or the cropped source.
fn latest<'a>(artifacts: &'a [Artifact], base: &'a Bitmap) -> &'a Bitmap {
    artifacts.last().map_or(base, |a| &a.bitmap)
}
