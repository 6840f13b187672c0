use std::path::PathBuf;

use pixel_art::PixelArtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedLayout(String),

    #[error("Bitmap error: {0}")]
    Bitmap(#[from] PixelArtError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PixelArtError),
}

impl AppError {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the run was rejected before any pixel work.
    pub fn is_configuration(&self) -> bool {
        match self {
            AppError::Config(_) => true,
            AppError::Pipeline(e) => e.is_configuration(),
            _ => false,
        }
    }
}
