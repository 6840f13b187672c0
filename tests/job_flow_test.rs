//! End-to-end job tests: PNG on disk in, PNG files on disk out.

mod common;

use pixel_art::{Bitmap, Rgba, RunConfiguration};
use pixelise::error::AppError;
use pixelise::models::{ConfigOverrides, RunConfig};
use pixelise::services::{run_job, JobReport, JobSpec};
use pretty_assertions::assert_eq;

use common::fixtures::{self, colors};
use common::Workspace;

fn run(ws: &Workspace, config: &RunConfig) -> Result<JobReport, AppError> {
    run_job(&JobSpec {
        input: ws.input.clone(),
        output_dir: ws.output_dir.clone(),
        output_name: "output".to_string(),
        config: config.to_run_configuration()?,
        write_intermediates: true,
    })
}

fn blocks(size: u32) -> RunConfig {
    RunConfig {
        pixel_width: size,
        pixel_height: size,
        ..RunConfig::default()
    }
}

#[test]
fn test_solid_red_reduced() {
    let ws = Workspace::with_input(&Bitmap::filled(4, 4, colors::RED));

    let report = run(&ws, &blocks(2)).unwrap();

    assert_eq!(report.output_dimensions, (2, 2));
    common::assert_outputs(&ws.output_dir, &["pixelated", "output"]);
    common::assert_uniform(&common::read_png(&ws.output("output")), colors::RED);
}

#[test]
fn test_solid_red_same_size_is_unchanged() {
    let input = Bitmap::filled(4, 4, colors::RED);
    let ws = Workspace::with_input(&input);
    let config = RunConfig {
        keep_size: true,
        ..blocks(2)
    };

    run(&ws, &config).unwrap();

    assert_eq!(common::read_png(&ws.output("output")), input);
}

#[test]
fn test_scaling_replicates_each_block() {
    let ws = Workspace::with_input(&fixtures::quadrants(4));
    let config = RunConfig {
        scaling: 3,
        ..blocks(4)
    };

    run(&ws, &config).unwrap();

    let out = common::read_png(&ws.output("output"));
    assert_eq!(out.dimensions(), (6, 6));
    assert_eq!(out.pixel(0, 0), Rgba::opaque(255, 0, 0));
    assert_eq!(out.pixel(2, 2), Rgba::opaque(255, 0, 0));
    assert_eq!(out.pixel(3, 0), Rgba::opaque(0, 255, 0));
    assert_eq!(out.pixel(0, 5), Rgba::opaque(0, 0, 255));
    assert_eq!(out.pixel(5, 5), Rgba::opaque(255, 255, 255));
}

#[test]
fn test_quantizer_sees_averaged_blocks() {
    let ws = Workspace::with_input(&fixtures::checkerboard(4, 4));
    let config = RunConfig {
        keep_size: true,
        apply_palette: true,
        palette: vec!["#000000".into(), "#808080".into(), "#FFFFFF".into()],
        ..blocks(2)
    };

    let report = run(&ws, &config).unwrap();

    assert_eq!(report.artifacts.len(), 2);
    common::assert_outputs(&ws.output_dir, &["pixelated", "palette_applied", "output"]);
    common::assert_uniform(&common::read_png(&ws.output("output")), colors::GREY);
}

#[test]
fn test_invert_runs_last() {
    let ws = Workspace::with_input(&fixtures::quadrants(2));
    let config = RunConfig {
        apply_palette: true,
        invert: true,
        palette: vec!["#000000".into(), "#FFFFFF".into()],
        ..blocks(2)
    };

    run(&ws, &config).unwrap();

    common::assert_outputs(
        &ws.output_dir,
        &["pixelated", "palette_applied", "inversion_applied", "output"],
    );
    let quantized = common::read_png(&ws.output("palette_applied"));
    let inverted = common::read_png(&ws.output("inversion_applied"));
    common::assert_palette_only(&quantized, &[colors::BLACK, colors::WHITE]);
    for (q, i) in quantized.pixels().iter().zip(inverted.pixels()) {
        assert_eq!(pixel_art::color::invert(*q), *i);
    }
    assert_eq!(common::read_png(&ws.output("output")), inverted);
}

#[test]
fn test_crop_drops_partial_blocks() {
    let input = Bitmap::from_fn(10, 9, |x, y| Rgba::opaque((x * 20) as u8, (y * 20) as u8, 0));
    let ws = Workspace::with_input(&input);

    let report = run(&ws, &blocks(4)).unwrap();

    assert_eq!(report.source_dimensions, (10, 9));
    assert_eq!(report.cropped_dimensions, (8, 8));
    common::assert_png_dimensions(&ws.output("output"), (2, 2));
}

#[test]
fn test_block_larger_than_image_keeps_axis() {
    let input = Bitmap::from_fn(3, 2, |x, _| Rgba::opaque(x as u8 * 30, 0, 0));
    let ws = Workspace::with_input(&input);
    let config = RunConfig {
        scaling: 2,
        ..blocks(8)
    };

    let report = run(&ws, &config).unwrap();

    assert_eq!(report.cropped_dimensions, (3, 2));
    let out = common::read_png(&ws.output("output"));
    assert_eq!(out.dimensions(), (2, 2));
    common::assert_uniform(&out, Rgba::opaque(30, 0, 0));
}

#[test]
fn test_no_stages_writes_cropped_input() {
    let input = Bitmap::from_fn(5, 5, |x, y| Rgba::new(x as u8, y as u8, 9, 200));
    let ws = Workspace::with_input(&input);
    let config = RunConfig {
        pixelise: false,
        ..blocks(2)
    };

    let report = run(&ws, &config).unwrap();

    assert!(report.artifacts.is_empty());
    common::assert_outputs(&ws.output_dir, &["output"]);
    let out = common::read_png(&ws.output("output"));
    assert_eq!(out.dimensions(), (4, 4));
    assert_eq!(out.pixel(3, 3), input.pixel(3, 3));
}

#[test]
fn test_empty_palette_aborts_before_output() {
    let ws = Workspace::with_input(&Bitmap::filled(4, 4, colors::RED));
    let config = RunConfig {
        apply_palette: true,
        palette: Vec::new(),
        ..blocks(2)
    };

    let err = run(&ws, &config).unwrap_err();

    assert!(err.is_configuration(), "unexpected error: {}", err);
    assert!(!ws.output_dir.exists());
}

#[test]
fn test_config_file_then_overrides() {
    let ws = Workspace::with_input(&fixtures::quadrants(4));
    let path = ws.write_config("pixel_width: 2\npixel_height: 2\nscaling: 5\n");

    let mut config = RunConfig::load(&path).unwrap();
    config.apply(ConfigOverrides {
        pixel_size: Some(4),
        scaling: Some(1),
        ..ConfigOverrides::default()
    });

    run(&ws, &config).unwrap();

    common::assert_png_dimensions(&ws.output("output"), (2, 2));
}

#[test]
fn test_default_configuration_is_core_default() {
    assert_eq!(
        RunConfig::default().to_run_configuration().unwrap(),
        RunConfiguration::default()
    );
}
