//! Where image bytes come from.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use retouch_core::RasterImage;
use tracing::debug;

use crate::{Format, IoError, IoResult};

/// Input for a load request.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded bytes already in memory.
    Bytes(Arc<[u8]>),
    /// File on disk.
    Path(PathBuf),
}

impl ImageSource {
    /// Source reading the file at `path`.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Source over in-memory bytes.
    pub fn bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Reads and decodes the source into an RGBA8 raster.
    pub fn read(&self) -> IoResult<RasterImage> {
        match self {
            Self::Bytes(bytes) => decode(bytes),
            Self::Path(path) => read(path),
        }
    }
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes.into())
    }
}

/// Decodes PNG or JPEG bytes, picked by magic number.
pub fn decode(bytes: &[u8]) -> IoResult<RasterImage> {
    match Format::from_bytes(bytes) {
        Format::Png => crate::png::decode(bytes),
        Format::Jpeg => crate::jpeg::decode(bytes),
        Format::Unknown => Err(IoError::UnsupportedFormat(
            "not a PNG or JPEG stream".into(),
        )),
    }
}

/// Reads and decodes an image file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RasterImage> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let image = decode(&bytes)?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "Read image");
    Ok(image)
}
