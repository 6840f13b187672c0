use pixel_art::Bitmap;
use std::path::{Path, PathBuf};

use crate::codec::encode_png;
use crate::error::AppError;

/// Writes named bitmaps as `<dir>/<name>.png`
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a bitmap named `name` is written to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }

    /// Encode `bitmap` and write it, creating the directory if needed.
    /// An existing file with the same name is replaced.
    pub fn write(&self, name: &str, bitmap: &Bitmap) -> Result<PathBuf, AppError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| AppError::io(&self.dir, e))?;

        let bytes = encode_png(bitmap)?;
        let path = self.path_for(name);
        std::fs::write(&path, &bytes).map_err(|e| AppError::io(&path, e))?;

        tracing::info!(
            path = %path.display(),
            width = bitmap.width(),
            height = bitmap.height(),
            bytes = bytes.len(),
            "Wrote image"
        );
        Ok(path)
    }
}
