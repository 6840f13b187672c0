use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixelise::models::{split_palette, ConfigOverrides, RunConfig};
use pixelise::services::{run_job, JobSpec};

#[derive(Parser)]
#[command(name = "pixelise")]
#[command(about = "Turn PNG images into block-averaged pixel art")]
struct Cli {
    /// Input PNG file
    #[arg(short, long)]
    input: PathBuf,

    /// Directory for intermediate images and the result
    #[arg(short = 'd', long, default_value = "./output")]
    output_dir: PathBuf,

    /// File name of the result, without the .png extension
    #[arg(short, long, default_value = "output")]
    output: String,

    /// YAML config file (falls back to the CONFIG_FILE env var)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the pixelation stage
    #[arg(long)]
    no_pixelise: bool,

    /// Map every pixel to its nearest palette color
    #[arg(long)]
    apply_palette: bool,

    /// Invert RGB channels of the result
    #[arg(long)]
    invert: bool,

    /// Block width and height in source pixels
    #[arg(long)]
    pixel_size: Option<u32>,

    /// Block width in source pixels (overrides --pixel-size)
    #[arg(long)]
    pixel_width: Option<u32>,

    /// Block height in source pixels (overrides --pixel-size)
    #[arg(long)]
    pixel_height: Option<u32>,

    /// Output pixels per block along each axis
    #[arg(long)]
    scale: Option<u32>,

    /// Keep the input resolution instead of one pixel per block
    #[arg(long)]
    keep_size: bool,

    /// Background pre-fill as hex (e.g. "#FFFFFFFF"); alpha 0 disables it
    #[arg(long)]
    background: Option<String>,

    /// Palette as comma-separated hex colors (e.g. "#000000,#FFFFFF,#FF0000")
    #[arg(long)]
    palette: Option<String>,

    /// Only write the final image
    #[arg(long)]
    no_intermediates: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            pixel_size: self.pixel_size,
            pixel_width: self.pixel_width,
            pixel_height: self.pixel_height,
            scaling: self.scale,
            background: self.background.clone(),
            palette: self.palette.as_deref().map(split_palette),
            no_pixelise: self.no_pixelise,
            apply_palette: self.apply_palette,
            invert: self.invert,
            keep_size: self.keep_size,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    let mut config = RunConfig::load_or_default(config_file.as_deref())?;
    config.apply(cli.overrides());
    let run_config = config.to_run_configuration()?;

    let spec = JobSpec {
        input: cli.input,
        output_dir: cli.output_dir,
        output_name: cli.output,
        config: run_config,
        write_intermediates: !cli.no_intermediates,
    };

    let report = run_job(&spec)
        .with_context(|| format!("Failed to pixelise {}", spec.input.display()))?;

    let (w, h) = report.output_dimensions;
    println!("Wrote {} ({}x{})", report.output.display(), w, h);
    Ok(())
}
