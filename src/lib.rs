//! Pixelise - turn PNG images into block-averaged pixel art
//!
//! Command-line front end for the `pixel-art` crate: PNG codec, YAML
//! configuration and artifact output. This library exposes modules for
//! integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
