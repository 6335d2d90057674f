//! # retouch-editor
//!
//! Editor shell around a [`retouch_core::EditorSession`].
//!
//! The [`Editor`] owns the session and a worker thread. Reading and
//! decoding images and encoding exports run on the worker; their results
//! come back as events that the owning thread applies with
//! [`Editor::poll`] or [`Editor::wait`]. Each load carries a generation
//! ticket, so a slow read that finishes after a newer load was started is
//! dropped instead of overwriting it.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use retouch_core::{EditorConfig, ExportOptions};
//! use retouch_editor::{Editor, EditorUpdate};
//!
//! let mut editor = Editor::new(&EditorConfig::default())?;
//! editor.load(std::path::Path::new("photo.jpg"))?;
//! editor.wait(Duration::from_secs(5))?;
//!
//! editor.apply_filter("warm");
//! if editor.request_export(ExportOptions::default())?.is_some() {
//!     if let Some(EditorUpdate::Exported { bytes, .. }) = editor.wait(Duration::from_secs(5))? {
//!         std::fs::write("photo.png", bytes).unwrap();
//!     }
//! }
//! # Ok::<(), retouch_editor::EditorError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod editor;
mod error;
mod handler;
mod messages;

pub use editor::Editor;
pub use error::{EditorError, EditorResult};
pub use messages::{EditorEvent, EditorMsg, EditorUpdate, ExportFrame, ExportRequest, RequestId};
