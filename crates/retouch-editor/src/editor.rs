//! The editor: session owner plus worker thread.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use retouch_core::{
    Channel, EditScript, EditorConfig, EditorSession, ExportOptions, LoadOutcome, LoadTicket,
    ReplaySummary,
};
use retouch_io::ImageSource;
use tracing::{debug, trace};

use crate::error::{EditorError, EditorResult};
use crate::handler::EditorHandler;
use crate::messages::{EditorEvent, EditorMsg, EditorUpdate, ExportFrame, ExportRequest, RequestId};

/// Owns an [`EditorSession`] and a worker thread for loads and exports.
///
/// All editing happens synchronously on the session. Loads and exports are
/// sent to the worker; their results are applied by [`poll`](Self::poll) or
/// [`wait`](Self::wait) on the owning thread, so the session keeps a single
/// writer.
pub struct Editor {
    session: EditorSession,
    default_export: ExportOptions,

    tx: Sender<EditorMsg>,
    rx: Receiver<EditorEvent>,

    /// Worker thread handle (Option for Drop).
    worker: Option<JoinHandle<()>>,

    next_request: RequestId,
}

impl Editor {
    /// Starts an editor configured from `config`.
    pub fn new(config: &EditorConfig) -> EditorResult<Self> {
        // Create bidirectional channels
        let (tx_to_worker, rx_in_worker) = channel();
        let (tx_to_editor, rx_from_worker) = channel();

        let worker = thread::Builder::new()
            .name("retouch-worker".into())
            .spawn(move || EditorHandler::new(rx_in_worker, tx_to_editor).run())
            .map_err(EditorError::Spawn)?;

        Ok(Self {
            session: EditorSession::from_config(config),
            default_export: config.export,
            tx: tx_to_worker,
            rx: rx_from_worker,
            worker: Some(worker),
            next_request: 0,
        })
    }

    /// The editing session.
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Export options from the configuration.
    pub fn default_export(&self) -> ExportOptions {
        self.default_export
    }

    fn send(&self, msg: EditorMsg) -> EditorResult<()> {
        self.tx.send(msg).map_err(|_| EditorError::Disconnected)
    }

    // ---------------------------------------------------------------------
    // Async operations
    // ---------------------------------------------------------------------

    /// Starts loading `source` on the worker.
    ///
    /// Any earlier load still in flight becomes stale. The session keeps its
    /// current image until the result is applied.
    pub fn load(&mut self, source: impl Into<ImageSource>) -> EditorResult<LoadTicket> {
        let ticket = self.session.begin_load();
        self.send(EditorMsg::Load {
            ticket,
            source: source.into(),
        })?;
        Ok(ticket)
    }

    /// Queues an export of the current state.
    ///
    /// Returns `None` when no image is loaded.
    pub fn request_export(&mut self, options: ExportOptions) -> EditorResult<Option<ExportRequest>> {
        let Some(image) = self.session.image() else {
            debug!("Export request ignored: no image loaded");
            return Ok(None);
        };
        let frame = ExportFrame {
            image: image.clone(),
            adjustments: *self.session.adjustments(),
            view: self.session.view(),
        };

        self.next_request += 1;
        let request = ExportRequest {
            id: self.next_request,
            options,
        };
        self.send(EditorMsg::Export { request, frame })?;
        trace!(request = request.id, format = %options.format, "Export queued");
        Ok(Some(request))
    }

    /// Applies every event already delivered by the worker.
    pub fn poll(&mut self) -> Vec<EditorUpdate> {
        let mut updates = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            updates.push(self.apply(event));
        }
        updates
    }

    /// Blocks up to `timeout` for the next worker event and applies it.
    ///
    /// Returns `Ok(None)` on timeout.
    pub fn wait(&mut self, timeout: Duration) -> EditorResult<Option<EditorUpdate>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(self.apply(event))),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(EditorError::Disconnected),
        }
    }

    fn apply(&mut self, event: EditorEvent) -> EditorUpdate {
        match event {
            EditorEvent::ImageLoaded { ticket, image } => {
                let (width, height) = image.dims();
                match self.session.complete_load(ticket, image) {
                    LoadOutcome::Applied => EditorUpdate::Loaded {
                        generation: ticket.generation(),
                        width,
                        height,
                    },
                    _ => EditorUpdate::StaleLoad {
                        generation: ticket.generation(),
                    },
                }
            }
            EditorEvent::LoadFailed { ticket, message } => {
                match self.session.fail_load(ticket, message.clone()) {
                    LoadOutcome::Stale => EditorUpdate::StaleLoad {
                        generation: ticket.generation(),
                    },
                    _ => EditorUpdate::LoadFailed {
                        generation: ticket.generation(),
                        message,
                    },
                }
            }
            EditorEvent::Exported { request, bytes } => EditorUpdate::Exported { request, bytes },
            EditorEvent::ExportFailed { request, message } => {
                EditorUpdate::ExportFailed { request, message }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Synchronous editing, forwarded to the session
    // ---------------------------------------------------------------------

    /// See [`EditorSession::set_channel`].
    pub fn set_channel(&mut self, channel: Channel, value: f32) {
        self.session.set_channel(channel, value);
    }

    /// See [`EditorSession::apply_filter`].
    pub fn apply_filter(&mut self, filter_id: &str) -> bool {
        self.session.apply_filter(filter_id)
    }

    /// See [`EditorSession::undo`].
    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    /// See [`EditorSession::redo`].
    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    /// See [`EditorSession::reset_adjustments`].
    pub fn reset_adjustments(&mut self) {
        self.session.reset_adjustments();
    }

    /// See [`EditorSession::set_zoom`].
    pub fn set_zoom(&mut self, factor: f32) {
        self.session.set_zoom(factor);
    }

    /// See [`EditorSession::set_rotation`].
    pub fn set_rotation(&mut self, degrees: f32) {
        self.session.set_rotation(degrees);
    }

    /// See [`EditorSession::zoom_by`].
    pub fn zoom_by(&mut self, delta: f32) {
        self.session.zoom_by(delta);
    }

    /// See [`EditorSession::rotate_by`].
    pub fn rotate_by(&mut self, degrees: f32) {
        self.session.rotate_by(degrees);
    }

    /// See [`EditorSession::fit_to_screen`].
    pub fn fit_to_screen(&mut self) {
        self.session.fit_to_screen();
    }

    /// Replays an edit script on the session.
    pub fn replay(&mut self, script: &EditScript) -> ReplaySummary {
        script.apply(&mut self.session)
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        // Signal worker to stop
        let _ = self.tx.send(EditorMsg::Close);

        // Wait for worker thread to finish
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::{ExportFormat, LoadState, RasterImage};

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RasterImage::filled(width, height, [40, 80, 120, 255]).unwrap();
        retouch_io::png::encode(&image, &[]).unwrap()
    }

    fn editor() -> Editor {
        Editor::new(&EditorConfig::default()).unwrap()
    }

    fn next(editor: &mut Editor) -> EditorUpdate {
        editor.wait(TIMEOUT).unwrap().expect("worker did not answer")
    }

    #[test]
    fn load_applies_on_wait() {
        let mut editor = editor();
        editor.set_channel(Channel::Hue, 20.0);

        let ticket = editor.load(png_bytes(5, 3)).unwrap();
        assert!(matches!(editor.session().load_state(), LoadState::Loading { .. }));
        // Prior edits survive until the result is applied.
        assert_eq!(editor.session().adjustments().hue, 20.0);

        let update = next(&mut editor);
        assert_eq!(
            update,
            EditorUpdate::Loaded {
                generation: ticket.generation(),
                width: 5,
                height: 3
            }
        );
        assert!(editor.session().adjustments().is_neutral());
        assert_eq!(editor.session().image().unwrap().dims(), (5, 3));
    }

    #[test]
    fn superseded_load_is_stale() {
        let mut editor = editor();
        let first = editor.load(png_bytes(2, 2)).unwrap();
        let second = editor.load(png_bytes(7, 7)).unwrap();

        assert_eq!(
            next(&mut editor),
            EditorUpdate::StaleLoad {
                generation: first.generation()
            }
        );
        assert!(matches!(
            next(&mut editor),
            EditorUpdate::Loaded { generation, width: 7, .. } if generation == second.generation()
        ));
        assert_eq!(editor.session().image().unwrap().dims(), (7, 7));
    }

    #[test]
    fn failed_load_keeps_session() {
        let mut editor = editor();
        editor.load(png_bytes(4, 4)).unwrap();
        next(&mut editor);
        editor.apply_filter("vivid");

        editor.load(b"definitely not an image".to_vec()).unwrap();
        assert!(matches!(next(&mut editor), EditorUpdate::LoadFailed { .. }));
        assert_eq!(editor.session().image().unwrap().dims(), (4, 4));
        assert_eq!(editor.session().active_filter(), Some("vivid"));
        assert!(matches!(editor.session().load_state(), LoadState::Failed { .. }));
    }

    #[test]
    fn export_requires_image() {
        let mut editor = editor();
        assert!(editor.request_export(ExportOptions::default()).unwrap().is_none());
    }

    #[test]
    fn export_roundtrip() {
        let mut editor = editor();
        editor.load(png_bytes(6, 4)).unwrap();
        next(&mut editor);
        editor.apply_filter("noir");

        let options = ExportOptions::new(ExportFormat::Png);
        let request = editor.request_export(options).unwrap().unwrap();
        // Edits after the request do not leak into it.
        editor.reset_adjustments();

        match next(&mut editor) {
            EditorUpdate::Exported { request: done, bytes } => {
                assert_eq!(done, request);
                let text = retouch_io::png::read_text(&bytes).unwrap();
                assert!(
                    text.iter()
                        .any(|(k, v)| k == retouch_io::ADJUSTMENTS_KEY && v.contains("saturation=-100"))
                );
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[test]
    fn export_encodes_with_request_options() {
        let mut editor = editor();
        editor.load(png_bytes(6, 4)).unwrap();
        next(&mut editor);

        let options = ExportOptions::new(ExportFormat::Jpeg).with_quality(60);
        let request = editor.request_export(options).unwrap().unwrap();
        assert_eq!(request.options, options);

        match next(&mut editor) {
            EditorUpdate::Exported { request: done, bytes } => {
                assert_eq!(done.options.format, ExportFormat::Jpeg);
                assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[test]
    fn forwarded_operations() {
        let mut editor = editor();
        editor.set_channel(Channel::Brightness, 10.0);
        assert!(editor.apply_filter("fade"));
        assert!(!editor.apply_filter("unknown"));
        assert!(editor.undo());
        assert!(editor.redo());
        editor.set_zoom(0.01);
        editor.set_rotation(-30.0);
        assert_eq!(editor.session().zoom(), 0.1);
        assert_eq!(editor.session().rotation(), -30.0);
        editor.reset_adjustments();
        assert_eq!(editor.session().history().len(), 4);

        editor.zoom_by(0.5);
        editor.rotate_by(90.0);
        assert_eq!(editor.session().zoom(), 1.5);
        assert_eq!(editor.session().rotation(), 90.0);
        editor.fit_to_screen();
        assert_eq!(editor.session().zoom(), 1.0);
        assert!(editor.poll().is_empty());
    }

    #[test]
    fn drop_joins_worker() {
        let mut editor = editor();
        editor.load(png_bytes(2, 2)).unwrap();
        drop(editor);
    }
}
