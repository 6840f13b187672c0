//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use pixel_art::{Bitmap, Rgba};
use pixelise::codec::decode_png;

/// Read and decode a PNG written by the pipeline
pub fn read_png(path: &Path) -> Bitmap {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected {} to exist: {}", path.display(), e));
    decode_png(&bytes).unwrap_or_else(|e| panic!("{} is not a valid PNG: {}", path.display(), e))
}

/// Assert the PNG at `path` has the given size
pub fn assert_png_dimensions(path: &Path, expected: (u32, u32)) {
    let bitmap = read_png(path);
    assert_eq!(
        bitmap.dimensions(),
        expected,
        "Unexpected dimensions for {}",
        path.display()
    );
}

/// Assert every pixel of `bitmap` equals `color`
pub fn assert_uniform(bitmap: &Bitmap, color: Rgba) {
    if let Some((i, p)) = bitmap.pixels().iter().enumerate().find(|(_, p)| **p != color) {
        let x = i as u32 % bitmap.width();
        let y = i as u32 / bitmap.width();
        panic!("Pixel ({}, {}) is {}, expected {}", x, y, p, color);
    }
}

/// Assert every pixel of `bitmap` is one of `palette`
pub fn assert_palette_only(bitmap: &Bitmap, palette: &[Rgba]) {
    for (i, p) in bitmap.pixels().iter().enumerate() {
        assert!(
            palette.contains(p),
            "Pixel {} is {}, not in palette",
            i,
            p
        );
    }
}

/// Assert `dir` contains exactly the named PNG files
pub fn assert_outputs(dir: &Path, expected: &[&str]) {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Cannot read {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut expected: Vec<String> = expected.iter().map(|n| format!("{n}.png")).collect();
    expected.sort();

    assert_eq!(names, expected, "Unexpected files in {}", dir.display());
}
