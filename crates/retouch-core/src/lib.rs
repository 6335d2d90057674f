//! # retouch-core
//!
//! Adjustment history engine for a raster photo editor.
//!
//! This crate owns the editing state of one open image:
//!
//! - [`Adjustments`] - The eight-channel adjustment vector
//! - [`FilterPreset`], [`PresetCatalog`] - Named partial overrides
//! - [`HistoryLog`] - Linear undo/redo log with truncation on new edits
//! - [`ViewTransform`] - Zoom and rotation, outside the history
//! - [`EditorSession`] - The single writer tying these together
//! - [`FilterChain`] - Compositor projection of the adjustment vector
//!
//! Pixels are never touched here. Decoding, encoding and drawing live in
//! `retouch-io` and behind the [`RenderSurface`] trait.
//!
//! ## Crate Structure
//!
//! ```text
//! retouch-core (this crate)
//!    ^
//!    |
//!    +-- retouch-io (decode / encode, encoding render surface)
//!    +-- retouch-editor (worker thread, async load and export)
//!    +-- retouch-cli (`retouch` binary)
//! ```
//!
//! ## Example
//!
//! ```
//! use retouch_core::prelude::*;
//!
//! let mut session = EditorSession::default();
//! session.set_channel(Channel::Hue, 45.0);
//! session.apply_filter("warm");
//! session.undo();
//!
//! assert_eq!(session.adjustments().hue, 45.0);
//! assert!(session.can_redo());
//! assert_eq!(
//!     session.filter_chain().to_string(),
//!     "brightness(1) contrast(1) saturate(1) blur(0px) hue-rotate(45deg)"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjust;
pub mod chain;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod image;
pub mod preset;
pub mod script;
pub mod session;
pub mod surface;
pub mod view;

// Re-exports for convenience
pub use adjust::*;
pub use chain::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use history::*;
pub use image::*;
pub use preset::*;
pub use script::*;
pub use session::*;
pub use surface::*;
pub use view::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use retouch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adjust::{Adjustments, Channel, ChannelRange, PartialAdjustments};
    pub use crate::chain::{FilterChain, RenderFilter};
    pub use crate::config::EditorConfig;
    pub use crate::error::{Error, Result};
    pub use crate::export::{ExportFormat, ExportOptions};
    pub use crate::history::{HistoryEntry, HistoryLog};
    pub use crate::image::{ImageRef, RasterImage};
    pub use crate::preset::{FilterPreset, PresetCatalog};
    pub use crate::script::{EditOp, EditScript, ReplaySummary};
    pub use crate::session::{EditorSession, LoadOutcome, LoadState, LoadTicket};
    pub use crate::surface::{RenderFrame, RenderSurface};
    pub use crate::view::ViewTransform;
}
