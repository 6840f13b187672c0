//! PNG decoding and encoding for [`Bitmap`].
//!
//! Every input layout the `png` crate understands is normalised to 8-bit
//! RGBA on the way in. Output is always 8-bit RGBA.

use pixel_art::{Bitmap, Rgba};
use std::io::Cursor;

use crate::error::CodecError;

/// Decode a PNG file into a bitmap.
///
/// Palette images are expanded, 16-bit channels are stripped to 8 bits and
/// grayscale is widened to RGB. Images without an alpha channel become
/// fully opaque.
pub fn decode_png(bytes: &[u8]) -> Result<Bitmap, CodecError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(CodecError::UnsupportedLayout(format!(
            "{:?} at {:?} bits",
            info.color_type, info.bit_depth
        )));
    }

    let pixels: Vec<Rgba> = match info.color_type {
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|c| Rgba::opaque(c[0], c[1], c[2]))
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|c| Rgba::new(c[0], c[0], c[0], c[1]))
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Rgba::opaque(v, v, v)).collect(),
        other => {
            return Err(CodecError::UnsupportedLayout(format!(
                "{:?} after expansion",
                other
            )))
        }
    };

    Ok(Bitmap::from_pixels(info.width, info.height, pixels)?)
}

/// Encode a bitmap as an 8-bit RGBA PNG.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, CodecError> {
    if bitmap.is_empty() {
        return Err(CodecError::Encode(format!(
            "cannot encode a {}x{} image",
            bitmap.width(),
            bitmap.height()
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, bitmap.width(), bitmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        writer
            .write_image_data(&bitmap.to_rgba8())
            .map_err(|e| CodecError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
