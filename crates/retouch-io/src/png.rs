//! PNG format support.
//!
//! Decodes any PNG the `png` crate understands into RGBA8 and encodes RGBA8
//! rasters, optionally carrying `tEXt` metadata chunks.
//!
//! # Features
//!
//! - Palette, grayscale, RGB and RGBA input, 8 or 16 bits
//! - `tEXt` chunks on write, read back with [`read_text`]
//! - sRGB chunk on write
//!
//! # Example
//!
//! ```rust,ignore
//! use retouch_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image, &[("retouch:filter", "noir")])?;
//! ```

use std::fs;
use std::io::Cursor;
use std::path::Path;

use retouch_core::RasterImage;
use tracing::trace;

use crate::{IoError, IoResult};

/// Decodes a PNG stream into an RGBA8 raster.
pub fn decode(bytes: &[u8]) -> IoResult<RasterImage> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => data.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => data
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            data.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => data
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        // 16-bit samples are big-endian; keep the high byte.
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => data
            .chunks_exact(8)
            .flat_map(|px| [px[0], px[2], px[4], px[6]])
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => data
            .chunks_exact(6)
            .flat_map(|px| [px[0], px[2], px[4], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => data
            .chunks_exact(2)
            .flat_map(|g| [g[0], g[0], g[0], 255])
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => data
            .chunks_exact(4)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[2]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    trace!(width = info.width, height = info.height, color = ?info.color_type, "Decoded PNG");
    Ok(RasterImage::new(info.width, info.height, rgba)?)
}

/// Reads a PNG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RasterImage> {
    let bytes = fs::read(path.as_ref())?;
    decode(&bytes)
}

/// Encodes an RGBA8 raster, adding one `tEXt` chunk per `(keyword, text)`.
pub fn encode(image: &RasterImage, text: &[(&str, &str)]) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::default());

        // Add sRGB chunk
        encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

        for &(keyword, value) in text {
            encoder
                .add_text_chunk(keyword.to_string(), value.to_string())
                .map_err(|e| IoError::EncodeError(e.to_string()))?;
        }

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .write_image_data(image.pixels())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    Ok(buffer)
}

/// Writes a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &RasterImage, text: &[(&str, &str)]) -> IoResult<()> {
    let bytes = encode(image, text)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Returns the `tEXt` chunks found before the image data.
pub fn read_text(bytes: &[u8]) -> IoResult<Vec<(String, String)>> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    Ok(reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
        .collect())
}
