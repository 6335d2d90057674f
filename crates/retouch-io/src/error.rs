//! Error types for decode and encode operations.

use std::io;
use thiserror::Error;

/// Decode/encode error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bytes are not a PNG or JPEG stream.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported color type or bit depth.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Image exceeds what the target format can store.
    #[error("dimensions {width}x{height} exceed {limit} for {format}")]
    TooLarge {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// Largest side the format accepts.
        limit: u32,
        /// Format name.
        format: &'static str,
    },

    /// Decoded buffer was rejected by the raster model.
    #[error("raster error: {0}")]
    Raster(#[from] retouch_core::Error),
}

impl IoError {
    /// Returns `true` if the bytes could not be read as an image.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat(_) | Self::DecodeError(_) | Self::UnsupportedBitDepth(_)
        )
    }
}

/// Result type for decode/encode operations.
pub type IoResult<T> = Result<T, IoError>;

impl From<IoError> for retouch_core::Error {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Io(e) => Self::Io(e),
            IoError::Raster(e) => e,
            other => Self::render(other.to_string()),
        }
    }
}
