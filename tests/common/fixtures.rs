//! Test fixtures: scratch directories and input images.

use std::path::{Path, PathBuf};

use pixel_art::{Bitmap, Rgba};
use pixelise::codec::encode_png;
use tempfile::TempDir;

/// Colors used by the fixture images
pub mod colors {
    use pixel_art::Rgba;

    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const GREY: Rgba = Rgba::opaque(128, 128, 128);
}

/// Scratch directory holding one input image and an output directory
pub struct Workspace {
    /// Keeps the directory alive for the duration of the test
    _temp: TempDir,
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Workspace {
    /// Write `bitmap` as `input.png` in a fresh temp directory
    pub fn with_input(bitmap: &Bitmap) -> Self {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let input = temp.path().join("input.png");
        std::fs::write(&input, encode_png(bitmap).expect("Failed to encode fixture"))
            .expect("Failed to write fixture");
        let output_dir = temp.path().join("output");

        Self {
            _temp: temp,
            input,
            output_dir,
        }
    }

    /// Root of the scratch directory
    pub fn root(&self) -> &Path {
        self._temp.path()
    }

    /// Write a YAML config file next to the input
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.root().join("pixelise.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Path of `<output_dir>/<name>.png`
    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.png"))
    }
}

/// Four solid quadrants (red, green, blue, white), each `half × half`
pub fn quadrants(half: u32) -> Bitmap {
    Bitmap::from_fn(half * 2, half * 2, |x, y| match (x < half, y < half) {
        (true, true) => Rgba::opaque(255, 0, 0),
        (false, true) => Rgba::opaque(0, 255, 0),
        (true, false) => Rgba::opaque(0, 0, 255),
        (false, false) => Rgba::opaque(255, 255, 255),
    })
}

/// Black/white checkerboard of single pixels
pub fn checkerboard(width: u32, height: u32) -> Bitmap {
    Bitmap::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            colors::BLACK
        } else {
            colors::WHITE
        }
    })
}
