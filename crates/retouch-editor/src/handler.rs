//! Worker thread handler for decode and encode work.
//!
//! Keeps file reads and codec work off the thread that owns the session.
//! The handler holds no editing state; everything it needs arrives in the
//! message.

use std::sync::mpsc::{Receiver, Sender};

use retouch_core::{LoadTicket, RenderFrame};
use retouch_io::{ImageSource, encode_frame};
use tracing::{debug, trace, warn};

use crate::messages::{EditorEvent, EditorMsg, ExportFrame, ExportRequest};

/// Worker thread handler.
pub struct EditorHandler {
    rx: Receiver<EditorMsg>,
    tx: Sender<EditorEvent>,
}

impl EditorHandler {
    /// Creates a new handler.
    pub fn new(rx: Receiver<EditorMsg>, tx: Sender<EditorEvent>) -> Self {
        Self { rx, tx }
    }

    /// Main event loop. Returns on [`EditorMsg::Close`] or when the editor
    /// side hangs up.
    pub fn run(self) {
        while let Ok(msg) = self.rx.recv() {
            match msg {
                EditorMsg::Close => break,
                EditorMsg::Load { ticket, source } => self.load(ticket, &source),
                EditorMsg::Export { request, frame } => self.export(request, &frame),
            }
        }
        debug!("Editor worker shutdown");
    }

    fn send(&self, event: EditorEvent) {
        if self.tx.send(event).is_err() {
            trace!("Editor gone, dropping event");
        }
    }

    fn load(&self, ticket: LoadTicket, source: &ImageSource) {
        debug!(generation = ticket.generation(), ?source, "Loading image");
        match source.read() {
            Ok(image) => self.send(EditorEvent::ImageLoaded { ticket, image }),
            Err(e) => {
                warn!(generation = ticket.generation(), error = %e, "Load failed");
                self.send(EditorEvent::LoadFailed {
                    ticket,
                    message: e.to_string(),
                });
            }
        }
    }

    fn export(&self, request: ExportRequest, frame: &ExportFrame) {
        let render = RenderFrame::new(&frame.image, frame.adjustments, frame.view);
        match encode_frame(&render, &request.options) {
            Ok(bytes) => self.send(EditorEvent::Exported { request, bytes }),
            Err(e) => {
                warn!(request = request.id, error = %e, "Export failed");
                self.send(EditorEvent::ExportFailed {
                    request,
                    message: e.to_string(),
                });
            }
        }
    }
}
