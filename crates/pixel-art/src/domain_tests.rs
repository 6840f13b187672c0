//! Domain-critical regression tests for pixel-art.
//!
//! These tests exercise whole chains of stages rather than single
//! functions. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use std::borrow::Cow;

    use crate::api::{ConfigError, Pipeline, PixelArtError, RunConfiguration, Stage};
    use crate::bitmap::Bitmap;
    use crate::color::{average, invert, Rgba};
    use crate::grid::{crop_to_grid, pixelate, BlockConfig, PixelateMode, PixelateOptions};
    use crate::palette::{quantize, Palette};

    const RED: Rgba = Rgba::opaque(255, 0, 0);

    fn config(block: u32, mode: PixelateMode) -> RunConfiguration {
        RunConfiguration {
            block_width: block,
            block_height: block,
            mode,
            ..RunConfiguration::default()
        }
    }

    /// Deterministic pseudo-random bitmap (xorshift), so tests cover
    /// arbitrary-looking content without a rand dependency.
    fn noise(width: u32, height: u32, seed: u32) -> Bitmap {
        let mut state = seed.max(1);
        Bitmap::from_fn(width, height, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            Rgba::from_bytes(state.to_le_bytes())
        })
    }

    // ========================================================================
    // End-to-end: solid red stays red
    // ========================================================================

    /// If this breaks, it means: averaging or output indexing corrupts
    /// uniform blocks; a 4x4 all-red image must stay all red at 4x4 in
    /// same-size mode and become 2x2 in reduced mode.
    #[test]
    fn test_solid_red_end_to_end() {
        let bitmap = Bitmap::filled(4, 4, RED);

        let same = Pipeline::new(config(2, PixelateMode::SameSize))
            .unwrap()
            .run(bitmap.clone())
            .unwrap();
        assert_eq!(same.final_bitmap(), &bitmap);

        let reduced = Pipeline::new(config(2, PixelateMode::Reduced))
            .unwrap()
            .run(bitmap)
            .unwrap();
        assert_eq!(reduced.final_bitmap(), &Bitmap::filled(2, 2, RED));
    }

    // ========================================================================
    // Configuration errors abort before any pixel work
    // ========================================================================

    /// If this breaks, it means: an empty palette slipped past validation
    /// and the quantizer would have to pick from nothing.
    #[test]
    fn test_empty_palette_rejected_before_run() {
        let cfg = RunConfiguration {
            palette: Vec::new(),
            quantize: true,
            ..RunConfiguration::default()
        };
        let err = Pipeline::new(cfg).unwrap_err();
        assert_eq!(err, PixelArtError::Configuration(ConfigError::EmptyPalette));
        assert!(err.is_configuration());
    }

    // ========================================================================
    // Cropper
    // ========================================================================

    /// If this breaks, it means: the cropper allocates or alters pixels on
    /// bitmaps that already fit the grid.
    #[test]
    fn test_divisible_bitmaps_pass_through_untouched() {
        for (w, h, bw, bh) in [(8, 8, 2, 2), (12, 6, 3, 2), (5, 7, 5, 7), (16, 4, 1, 4)] {
            let bitmap = noise(w, h, w * 31 + h);
            let block = BlockConfig::new(bw, bh, 1).unwrap();
            match crop_to_grid(&bitmap, &block) {
                Cow::Borrowed(b) => assert!(std::ptr::eq(b, &bitmap)),
                Cow::Owned(_) => panic!("{}x{} with {}x{} blocks was copied", w, h, bw, bh),
            }
        }
    }

    /// If this breaks, it means: cropping shifted the image or kept a
    /// partial block.
    #[test]
    fn test_cropped_region_matches_source() {
        let bitmap = noise(13, 11, 7);
        let block = BlockConfig::new(4, 3, 1).unwrap();
        let cropped = crop_to_grid(&bitmap, &block);
        assert_eq!(cropped.dimensions(), (12, 9));
        for y in 0..9 {
            for x in 0..12 {
                assert_eq!(cropped.pixel(x, y), bitmap.pixel(x, y));
            }
        }
    }

    // ========================================================================
    // Averager
    // ========================================================================

    /// If this breaks, it means: same-size pixelation drifts when applied
    /// twice, i.e. block boundaries or averaging are inconsistent.
    #[test]
    fn test_same_size_pixelation_idempotent() {
        let options =
            PixelateOptions::new(BlockConfig::new(3, 2, 1).unwrap()).mode(PixelateMode::SameSize);
        let once = pixelate(&noise(12, 8, 99), &options).unwrap();
        let twice = pixelate(&once, &options).unwrap();
        assert_eq!(once, twice);
    }

    /// If this breaks, it means: reduced-mode output size or block
    /// replication is wrong for scaling factors above 1.
    #[test]
    fn test_reduced_sizes_and_uniform_footprints() {
        let bitmap = noise(12, 8, 3);
        let base = pixelate(&bitmap, &PixelateOptions::new(BlockConfig::new(3, 2, 1).unwrap()))
            .unwrap();
        assert_eq!(base.dimensions(), (4, 4));

        for k in 2..=4 {
            let block = BlockConfig::new(3, 2, k).unwrap();
            let scaled = pixelate(&bitmap, &PixelateOptions::new(block)).unwrap();
            assert_eq!(scaled.dimensions(), (4 * k, 4 * k));
            for y in 0..scaled.height() {
                for x in 0..scaled.width() {
                    assert_eq!(
                        scaled.pixel(x, y),
                        base.pixel(x / k, y / k),
                        "k={} at ({}, {})",
                        k,
                        x,
                        y
                    );
                }
            }
        }
    }

    /// If this breaks, it means: the block averager stopped using the same
    /// truncating mean as `average`.
    #[test]
    fn test_block_average_matches_color_math() {
        let bitmap = noise(4, 4, 12345);
        let options = PixelateOptions::new(BlockConfig::square(4, 1).unwrap());
        let out = pixelate(&bitmap, &options).unwrap();
        assert_eq!(out.pixel(0, 0), average(bitmap.pixels()));
    }

    // ========================================================================
    // Quantizer and inverter
    // ========================================================================

    /// If this breaks, it means: the quantizer blends or modifies palette
    /// colors instead of copying them.
    #[test]
    fn test_quantizer_output_is_palette_only() {
        let palette = Palette::from_hex(&["#000", "#FFF", "#FF000088", "#00FF0010"]).unwrap();
        let out = quantize(&noise(20, 20, 5), &palette);
        assert!(out.pixels().iter().all(|p| palette.colors().contains(p)));
    }

    /// If this breaks, it means: inversion touched alpha or is not its own
    /// inverse.
    #[test]
    fn test_inversion_involution_on_noise() {
        let bitmap = noise(9, 9, 42);
        for &p in bitmap.pixels() {
            assert_eq!(invert(invert(p)), p);
            assert_eq!(invert(p).a, p.a);
        }
        assert_eq!(
            crate::invert::invert(&crate::invert::invert(&bitmap)),
            bitmap
        );
    }

    // ========================================================================
    // Stage ordering
    // ========================================================================

    /// If this breaks, it means: a later stage read the original input
    /// instead of the previous stage's output. Quantizing the raw
    /// checkerboard would give black/white pixels; quantizing the averaged
    /// grey gives the mid entry.
    #[test]
    fn test_quantizer_reads_pixelated_output() {
        let grey = Rgba::opaque(128, 128, 128);
        let cfg = RunConfiguration {
            palette: vec![Rgba::opaque(0, 0, 0), grey, Rgba::opaque(255, 255, 255)],
            quantize: true,
            ..config(2, PixelateMode::SameSize)
        };
        let checkerboard = Bitmap::from_fn(4, 4, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba::opaque(0, 0, 0)
            } else {
                Rgba::opaque(255, 255, 255)
            }
        });

        let output = Pipeline::new(cfg).unwrap().run(checkerboard).unwrap();
        assert!(output.final_bitmap().pixels().iter().all(|&p| p == grey));
        assert_eq!(output.artifacts().len(), 2);
        assert_eq!(output.artifacts()[1].stage, Stage::Quantized);
    }

    /// If this breaks, it means: inversion ran before quantization. The
    /// palette is asymmetric so the two orders give different colors.
    #[test]
    fn test_inversion_runs_after_quantization() {
        let cfg = RunConfiguration {
            palette: vec![Rgba::opaque(10, 10, 10), Rgba::opaque(200, 200, 200)],
            pixelate: false,
            quantize: true,
            invert: true,
            ..config(1, PixelateMode::Reduced)
        };
        let bitmap = Bitmap::filled(2, 2, Rgba::opaque(30, 30, 30));
        let output = Pipeline::new(cfg).unwrap().run(bitmap).unwrap();

        // quantize -> (10,10,10), invert -> (245,245,245)
        // (invert first would give (225,..) -> quantize -> (200,200,200))
        assert!(output
            .final_bitmap()
            .pixels()
            .iter()
            .all(|&p| p == Rgba::opaque(245, 245, 245)));
    }

    /// If this breaks, it means: the pipeline stopped cropping before
    /// pixelating, so reduced output picked up partial edge blocks.
    #[test]
    fn test_pipeline_crops_before_pixelating() {
        let output = Pipeline::new(config(4, PixelateMode::Reduced))
            .unwrap()
            .run(noise(10, 9, 8))
            .unwrap();
        assert_eq!(output.cropped_dimensions(), (8, 8));
        assert_eq!(output.final_bitmap().dimensions(), (2, 2));
    }
}
