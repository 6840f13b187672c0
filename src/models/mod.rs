pub mod config;

pub use config::{split_palette, ConfigOverrides, RunConfig};
