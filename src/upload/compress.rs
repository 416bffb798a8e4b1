//! Lossy PNG compression for uploaded images
//!
//! Decodes the uploaded PNG, palette-quantizes it with NeuQuant at the
//! configured quality and re-encodes it as an indexed PNG with a tRNS
//! chunk for alpha. The quality knob maps onto the quantizer's
//! sampling factor: 100 trains on every pixel, lower settings sample
//! more sparsely.

use color_quant::NeuQuant;
use image::ImageFormat;
use thiserror::Error;

/// Palette size of the quantized output
const PALETTE_COLORS: usize = 256;

/// Failures of the compression pipeline
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("failed to decode PNG: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Compress PNG bytes at the given quality (1-100)
pub fn compress_png(input: &[u8], quality: u8) -> Result<Vec<u8>, CompressError> {
    let decoded = image::load_from_memory_with_format(input, ImageFormat::Png)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let quantizer = NeuQuant::new(sampling_factor(quality), PALETTE_COLORS, rgba.as_raw());

    // The quantizer yields an RGBA palette; PNG wants it split into the
    // PLTE (RGB) and tRNS (alpha) chunks.
    let palette_rgba = quantizer.color_map_rgba();
    let mut palette = Vec::with_capacity(PALETTE_COLORS * 3);
    let mut alpha = Vec::with_capacity(PALETTE_COLORS);
    for entry in palette_rgba.chunks_exact(4) {
        palette.extend_from_slice(&entry[..3]);
        alpha.push(entry[3]);
    }

    let indices: Vec<u8> = rgba
        .as_raw()
        .chunks_exact(4)
        .map(|pixel| quantizer.index_of(pixel) as u8)
        .collect();

    let mut output = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut output, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(palette);
        encoder.set_trns(alpha);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&indices)?;
    }

    Ok(output)
}

/// Map a 1-100 quality onto NeuQuant's 1-30 sampling factor (1 trains
/// on every pixel)
fn sampling_factor(quality: u8) -> i32 {
    let quality = i32::from(quality.clamp(1, 100));
    (31 - (quality * 30) / 100).clamp(1, 30)
}
