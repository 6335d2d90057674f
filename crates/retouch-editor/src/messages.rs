//! Message types for editor <-> worker communication.
//!
//! The editor sends commands, the worker sends events back. Results carry
//! the load ticket or export request they answer so stale ones can be told
//! apart.

use retouch_core::{Adjustments, ExportOptions, ImageRef, LoadTicket, RasterImage, ViewTransform};
use retouch_io::ImageSource;

/// Identifier of an export request.
pub type RequestId = u64;

/// Handle returned by [`Editor::request_export`](crate::Editor::request_export).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    /// Request identifier, unique per editor.
    pub id: RequestId,
    /// Encoding options captured at request time.
    pub options: ExportOptions,
}

/// Owned snapshot of the state an export renders.
#[derive(Debug, Clone)]
pub struct ExportFrame {
    /// Working image.
    pub image: ImageRef,
    /// Adjustment vector at request time.
    pub adjustments: Adjustments,
    /// View state at request time.
    pub view: ViewTransform,
}

/// Messages from the editor to the worker thread.
#[derive(Debug)]
pub enum EditorMsg {
    /// Read and decode an image.
    Load {
        /// Ticket the result must be applied with.
        ticket: LoadTicket,
        /// Where the bytes come from.
        source: ImageSource,
    },

    /// Encode a snapshot.
    Export {
        /// Request being answered.
        request: ExportRequest,
        /// State to render.
        frame: ExportFrame,
    },

    /// Stop the worker.
    Close,
}

/// Events from the worker thread to the editor.
#[derive(Debug)]
pub enum EditorEvent {
    /// Image decoded.
    ImageLoaded {
        /// Ticket of the load.
        ticket: LoadTicket,
        /// Decoded raster.
        image: RasterImage,
    },

    /// Read or decode failed.
    LoadFailed {
        /// Ticket of the load.
        ticket: LoadTicket,
        /// Error description.
        message: String,
    },

    /// Snapshot encoded.
    Exported {
        /// Request being answered.
        request: ExportRequest,
        /// Encoded bytes.
        bytes: Vec<u8>,
    },

    /// Encoding failed.
    ExportFailed {
        /// Request being answered.
        request: ExportRequest,
        /// Error description.
        message: String,
    },
}

/// What applying a worker event did to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorUpdate {
    /// A new image replaced the session.
    Loaded {
        /// Generation of the applied load.
        generation: u64,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// The latest load failed; the prior session is unchanged.
    LoadFailed {
        /// Generation of the failed load.
        generation: u64,
        /// Error description.
        message: String,
    },
    /// A superseded load finished and was dropped.
    StaleLoad {
        /// Generation of the dropped load.
        generation: u64,
    },
    /// An export finished.
    Exported {
        /// Request being answered.
        request: ExportRequest,
        /// Encoded bytes.
        bytes: Vec<u8>,
    },
    /// An export failed.
    ExportFailed {
        /// Request being answered.
        request: ExportRequest,
        /// Error description.
        message: String,
    },
}
