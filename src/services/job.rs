//! One pixelisation run: read, transform, persist.

use pixel_art::{Pipeline, RunConfiguration};
use std::path::PathBuf;

use crate::codec::decode_png;
use crate::error::AppError;
use crate::services::ArtifactStore;

/// Inputs for [`run_job`]
#[derive(Debug, Clone)]
pub struct JobSpec {
    /// PNG file to read
    pub input: PathBuf,
    /// Directory receiving intermediates and the final image
    pub output_dir: PathBuf,
    /// File stem of the final image
    pub output_name: String,
    /// Pipeline settings
    pub config: RunConfiguration,
    /// Also write one image per stage that ran
    pub write_intermediates: bool,
}

/// What a finished job produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub source_dimensions: (u32, u32),
    pub cropped_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
    /// Intermediate files, in stage order
    pub artifacts: Vec<PathBuf>,
    /// The final image
    pub output: PathBuf,
}

/// Run the pipeline over `spec.input` and write the results.
///
/// The configuration is validated before the input file is opened, so a
/// bad configuration never touches the filesystem.
pub fn run_job(spec: &JobSpec) -> Result<JobReport, AppError> {
    let pipeline = Pipeline::new(spec.config.clone())?;
    let block = pipeline.block();
    tracing::debug!(
        block_width = block.width(),
        block_height = block.height(),
        scaling = block.scaling(),
        stages = ?pipeline.enabled_stages(),
        "Pipeline configured"
    );

    let bytes = std::fs::read(&spec.input).map_err(|e| AppError::io(&spec.input, e))?;
    let bitmap = decode_png(&bytes)?;
    let (width, height) = bitmap.dimensions();
    tracing::info!(
        path = %spec.input.display(),
        width,
        height,
        "Loaded input image"
    );

    if block.width() > width || block.height() > height {
        tracing::warn!(
            width,
            height,
            block_width = block.width(),
            block_height = block.height(),
            "Block is larger than the image; that axis is kept whole"
        );
    }

    let output = pipeline.run(bitmap)?;
    if output.was_cropped() {
        let (cw, ch) = output.cropped_dimensions();
        tracing::info!(from = ?(width, height), to = ?(cw, ch), "Cropped to block grid");
    }

    let store = ArtifactStore::new(&spec.output_dir);
    let mut artifacts = Vec::new();
    for artifact in output.artifacts() {
        tracing::info!(stage = %artifact.stage, "Stage complete");
        if spec.write_intermediates {
            artifacts.push(store.write(artifact.name(), &artifact.bitmap)?);
        }
    }

    let final_bitmap = output.final_bitmap();
    let output_path = store.write(&spec.output_name, final_bitmap)?;

    Ok(JobReport {
        source_dimensions: output.source_dimensions(),
        cropped_dimensions: output.cropped_dimensions(),
        output_dimensions: final_bitmap.dimensions(),
        artifacts,
        output: output_path,
    })
}
