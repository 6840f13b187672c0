//! Public API for the pixel-art crate.
//!
//! This module provides the high-level API: the [`Pipeline`] with its
//! [`RunConfiguration`], and the [`PixelArtError`] unified error type.

mod error;
mod pipeline;

pub use error::{ConfigError, PixelArtError};
pub use pipeline::{
    process, Artifact, Pipeline, PipelineOutput, PipelineState, RunConfiguration, Stage,
};
