//! Error types for retouch-core operations.
//!
//! Most editing operations never fail: an unknown preset, an undo at the
//! start of the log or an export without an image are soft no-ops reported
//! through `bool`/`Option` return values. [`Error`] covers the remaining hard
//! boundaries:
//!
//! - Parsing channel names, preset catalogs, configs and edit scripts
//! - Validating raster buffers handed over by the decode layer
//! - Render surfaces failing during export
//!
//! # Usage
//!
//! ```rust
//! use retouch_core::{Channel, Error};
//!
//! let err = "gamma".parse::<Channel>().unwrap_err();
//! assert!(matches!(err, Error::UnknownChannel { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the adjustment engine and its data model.
#[derive(Debug, Error)]
pub enum Error {
    /// Channel name does not match any of the adjustment channels.
    #[error("unknown adjustment channel: {name}")]
    UnknownChannel {
        /// Name that failed to parse
        name: String,
    },

    /// Two presets in one catalog share an identifier.
    #[error("duplicate preset id: {id}")]
    DuplicatePreset {
        /// Identifier that appeared more than once
        id: String,
    },

    /// Export format name is not recognized.
    #[error("unsupported export format: {format}")]
    UnsupportedFormat {
        /// Format name or extension
        format: String,
    },

    /// Invalid raster dimensions.
    ///
    /// Returned when width or height is zero, or the byte size of the
    /// buffer would overflow.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Pixel buffer length does not match `width * height * 4`.
    #[error("pixel buffer holds {got} bytes, expected {expected}")]
    BufferSize {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        got: usize,
    },

    /// The render surface could not produce an encoded snapshot.
    #[error("render error: {0}")]
    Render(String),

    /// I/O error reading configs or scripts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::UnknownChannel`] error.
    #[inline]
    pub fn unknown_channel(name: impl Into<String>) -> Self {
        Self::UnknownChannel { name: name.into() }
    }

    /// Creates an [`Error::DuplicatePreset`] error.
    #[inline]
    pub fn duplicate_preset(id: impl Into<String>) -> Self {
        Self::DuplicatePreset { id: id.into() }
    }

    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Render`] error.
    #[inline]
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if the error came from parsing configuration input.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownChannel { .. }
                | Self::DuplicatePreset { .. }
                | Self::UnsupportedFormat { .. }
                | Self::Yaml(_)
        )
    }

    /// Returns `true` if this is a raster validation error.
    #[inline]
    pub fn is_raster_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. } | Self::BufferSize { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
