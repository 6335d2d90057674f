//! # retouch-io
//!
//! Decoding and export encoding for the retouch editor.
//!
//! - [`ImageSource`] / [`decode`] / [`read`] - PNG or JPEG bytes into an RGBA8
//!   [`RasterImage`](retouch_core::RasterImage), picked by magic number
//! - [`EncodingSurface`] - a [`RenderSurface`](retouch_core::RenderSurface)
//!   that encodes export frames
//! - [`png`] / [`jpeg`] - the format codecs
//!
//! # Example
//!
//! ```rust,ignore
//! use retouch_core::{EditorSession, ExportOptions};
//! use retouch_io::{EncodingSurface, ImageSource};
//!
//! let mut session = EditorSession::default();
//! session.load(ImageSource::path("photo.jpg").read()?);
//! session.apply_filter("vintage");
//!
//! let mut surface = EncodingSurface::new(ExportOptions::default());
//! let png = session.export(Some(&mut surface))?;
//! ```

#![warn(missing_docs)]

pub mod detect;
pub mod error;
pub mod jpeg;
pub mod png;
pub mod source;
pub mod surface;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use source::{decode, read, ImageSource};
pub use surface::{encode_frame, EncodingSurface, ADJUSTMENTS_KEY, FILTER_KEY};
