//! JPEG format support.
//!
//! Decodes RGB, grayscale and CMYK JPEGs into RGBA8 and encodes RGBA8
//! rasters as baseline RGB JPEG. JPEG carries no alpha: it is dropped on
//! encode and set to 255 on decode.

use std::io::{BufReader, Cursor};

use jpeg_encoder::{ColorType as JpegColorType, Encoder};
use retouch_core::RasterImage;
use tracing::trace;

use crate::{IoError, IoResult};

/// Largest side a baseline JPEG can store.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Decodes a JPEG stream into an RGBA8 raster.
pub fn decode(bytes: &[u8]) -> IoResult<RasterImage> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(Cursor::new(bytes)));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l16| [l16[0], l16[0], l16[0], 255])
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                // Approximate conversion, no color management.
                let k = 1.0 - cmyk[3] as f32 / 255.0;
                let channel = |v: u8| ((1.0 - v as f32 / 255.0) * k * 255.0) as u8;
                [channel(cmyk[0]), channel(cmyk[1]), channel(cmyk[2]), 255]
            })
            .collect(),
    };

    trace!(width, height, format = ?info.pixel_format, "Decoded JPEG");
    Ok(RasterImage::new(width, height, rgba)?)
}

/// Encodes an RGBA8 raster at `quality` (1-100), dropping alpha.
pub fn encode(image: &RasterImage, quality: u8) -> IoResult<Vec<u8>> {
    let (width, height) = image.dims();
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(IoError::TooLarge {
            width,
            height,
            limit: MAX_DIMENSION,
            format: "jpeg",
        });
    }

    let rgb: Vec<u8> = image
        .pixels()
        .chunks_exact(4)
        .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
        .collect();

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, quality.clamp(1, 100));
    encoder
        .encode(&rgb, width as u16, height as u16, JpegColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    Ok(buffer)
}
