//! Editor session: the single owner of all editing state.
//!
//! An [`EditorSession`] holds the loaded image, the history log (whose
//! current entry is the visible adjustment vector and active filter), and
//! the zoom/rotation view state. Every mutation goes through the methods
//! below; there is no ambient global state.
//!
//! # Loading
//!
//! Reading image bytes is asynchronous and lives outside this crate. The
//! session only tracks it through generation tokens:
//!
//! ```rust
//! use retouch_core::{EditorSession, LoadOutcome, PresetCatalog, RasterImage};
//!
//! let mut session = EditorSession::new(PresetCatalog::builtin());
//! let first = session.begin_load();
//! let second = session.begin_load();
//!
//! let img = RasterImage::filled(4, 4, [0, 0, 0, 255]).unwrap();
//! assert_eq!(session.complete_load(second, img.clone()), LoadOutcome::Applied);
//! // The slower first read arrives late and is discarded.
//! assert_eq!(session.complete_load(first, img), LoadOutcome::Stale);
//! ```
//!
//! # Editing
//!
//! ```rust
//! use retouch_core::{Channel, EditorSession, PresetCatalog};
//!
//! let mut session = EditorSession::new(PresetCatalog::builtin());
//! session.set_channel(Channel::Brightness, 20.0);
//! session.set_channel(Channel::Contrast, 10.0);
//! session.apply_filter("noir");
//!
//! assert_eq!(session.adjustments().contrast, 30.0);
//! assert_eq!(session.adjustments().brightness, 0.0);
//! assert_eq!(session.history().len(), 4);
//! assert!(session.can_undo());
//! assert!(!session.can_redo());
//! ```

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::{
    Adjustments, Channel, EditorConfig, FilterChain, HistoryEntry, HistoryLog, ImageRef,
    PresetCatalog, RasterImage, RenderFrame, RenderSurface, Result, ViewTransform,
};

/// Generation counter for invalidating stale loads.
pub type Generation = u64;

/// Token returned by [`EditorSession::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    generation: Generation,
}

impl LoadTicket {
    /// Generation this load was started in.
    pub fn generation(self) -> Generation {
        self.generation
    }
}

/// What happened to a finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image replaced the session.
    Applied,
    /// A newer load was started since; the result was dropped.
    Stale,
    /// The read failed; the prior session is untouched.
    Failed,
}

/// Progress of the most recent load request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load was ever requested.
    #[default]
    Idle,
    /// A read is in flight.
    Loading {
        /// Generation of the outstanding read.
        generation: Generation,
    },
    /// The latest load was applied.
    Ready,
    /// The latest read failed.
    Failed {
        /// Generation of the failed read.
        generation: Generation,
        /// Error reported by the read primitive.
        message: String,
    },
}

/// Owned, single-writer editing state.
#[derive(Debug, Clone)]
pub struct EditorSession {
    catalog: Arc<PresetCatalog>,
    original: Option<ImageRef>,
    current: Option<ImageRef>,
    history: HistoryLog,
    view: ViewTransform,
    generation: Generation,
    load_state: LoadState,
}

impl EditorSession {
    /// Creates an empty session (no image) over `catalog`.
    pub fn new(catalog: PresetCatalog) -> Self {
        Self::with_shared_catalog(Arc::new(catalog), None)
    }

    /// Creates an empty session configured from `config`.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::with_shared_catalog(Arc::new(config.presets.clone()), config.history_limit)
    }

    /// Creates an empty session sharing an existing catalog.
    pub fn with_shared_catalog(catalog: Arc<PresetCatalog>, history_limit: Option<usize>) -> Self {
        Self {
            catalog,
            original: None,
            current: None,
            history: HistoryLog::with_limit(history_limit),
            view: ViewTransform::IDENTITY,
            generation: 0,
            load_state: LoadState::Idle,
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Preset catalog supplied at construction.
    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// Working image, if one is loaded.
    pub fn image(&self) -> Option<&ImageRef> {
        self.current.as_ref()
    }

    /// Image as originally loaded.
    pub fn original_image(&self) -> Option<&ImageRef> {
        self.original.as_ref()
    }

    /// `true` once an image has been loaded.
    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// The visible adjustment vector: always the log entry under the cursor.
    pub fn adjustments(&self) -> &Adjustments {
        &self.history.current().adjustments
    }

    /// Preset that produced the visible vector, if any.
    pub fn active_filter(&self) -> Option<&str> {
        self.history.current().filter.as_deref()
    }

    /// The undo/redo log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Zoom and rotation.
    pub fn view(&self) -> ViewTransform {
        self.view
    }

    /// Zoom factor.
    pub fn zoom(&self) -> f32 {
        self.view.zoom
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.view.rotation
    }

    /// Progress of the most recent load.
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Latest generation handed out by [`begin_load`](Self::begin_load).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// `true` when there is an earlier entry to return to.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// `true` when there is an undone entry to reapply.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Compositor projection of the visible vector.
    pub fn filter_chain(&self) -> FilterChain {
        FilterChain::from_adjustments(self.adjustments())
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Starts a load and returns its ticket.
    ///
    /// Any earlier outstanding ticket becomes stale. The session keeps its
    /// current image and edits until the load completes.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.load_state = LoadState::Loading {
            generation: self.generation,
        };
        debug!(generation = self.generation, "Load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Finishes a load with the decoded image.
    ///
    /// Applies only if `ticket` is the most recent one and still
    /// outstanding; the whole session is then reset around the new image.
    /// A ticket that was already completed or failed counts as stale.
    pub fn complete_load(&mut self, ticket: LoadTicket, image: RasterImage) -> LoadOutcome {
        if !self.is_outstanding(ticket) {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                "Discarding stale load"
            );
            return LoadOutcome::Stale;
        }

        let (width, height) = image.dims();
        let image = Arc::new(image);
        self.original = Some(Arc::clone(&image));
        self.current = Some(image);
        self.history.clear();
        self.view.reset();
        self.load_state = LoadState::Ready;
        info!(generation = ticket.generation, width, height, "Image loaded");
        LoadOutcome::Applied
    }

    /// Records a failed read. The prior session stays as it was.
    pub fn fail_load(&mut self, ticket: LoadTicket, message: impl Into<String>) -> LoadOutcome {
        if !self.is_outstanding(ticket) {
            debug!(stale = ticket.generation, "Ignoring failure of stale load");
            return LoadOutcome::Stale;
        }
        let message = message.into();
        warn!(generation = ticket.generation, %message, "Image load failed");
        self.load_state = LoadState::Failed {
            generation: ticket.generation,
            message,
        };
        LoadOutcome::Failed
    }

    /// `true` while `ticket` is the in-flight load of the latest generation.
    fn is_outstanding(&self, ticket: LoadTicket) -> bool {
        matches!(
            self.load_state,
            LoadState::Loading { generation } if generation == ticket.generation
        )
    }

    /// Loads an already decoded image in one step.
    pub fn load(&mut self, image: RasterImage) {
        let ticket = self.begin_load();
        self.complete_load(ticket, image);
    }

    // ---------------------------------------------------------------------
    // Editing
    // ---------------------------------------------------------------------

    /// Replaces one channel and records the result.
    ///
    /// No clamping: range limits are a control concern. The active filter is
    /// always cleared, even if the result matches a preset.
    pub fn set_channel(&mut self, channel: Channel, value: f32) {
        let next = self.adjustments().with(channel, value);
        trace!(%channel, value, "Set channel");
        self.history.push(HistoryEntry::manual(next));
    }

    /// Applies the preset `filter_id`.
    ///
    /// Returns `false` and changes nothing if the id is not in the catalog.
    pub fn apply_filter(&mut self, filter_id: &str) -> bool {
        let Some(preset) = self.catalog.get(filter_id) else {
            debug!(filter_id, "Unknown filter preset");
            return false;
        };
        let next = preset.resolve();
        trace!(filter_id, "Apply filter");
        self.history.push(HistoryEntry::preset(next, filter_id));
        true
    }

    /// Steps back one history entry. Returns `false` at the start of the log.
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    /// Steps forward one history entry. Returns `false` at the end of the log.
    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    /// Returns to neutral adjustments and the identity view.
    ///
    /// Unlike [`set_channel`](Self::set_channel), the neutral entry is
    /// appended after the last log entry, so redo entries past the cursor
    /// survive. The image is not reloaded.
    pub fn reset_adjustments(&mut self) {
        self.history.append_at_tail(HistoryEntry::neutral());
        self.view.reset();
        debug!(len = self.history.len(), "Adjustments reset");
    }

    /// Sets the zoom factor, clamped to `0.1..=3.0`. Not recorded in history.
    pub fn set_zoom(&mut self, factor: f32) {
        self.view.set_zoom(factor);
    }

    /// Sets the rotation to `degrees % 360`. Not recorded in history.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.view.set_rotation(degrees);
    }

    /// Changes the zoom by `delta`, with the same clamp as
    /// [`set_zoom`](Self::set_zoom).
    pub fn zoom_by(&mut self, delta: f32) {
        self.view.zoom_by(delta);
    }

    /// Adds `degrees` to the rotation, wrapped like
    /// [`set_rotation`](Self::set_rotation).
    pub fn rotate_by(&mut self, degrees: f32) {
        self.view.rotate_by(degrees);
    }

    /// Back to 1x zoom. Rotation is kept.
    pub fn fit_to_screen(&mut self) {
        self.view.fit();
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// Describes the current state for a render surface.
    ///
    /// `None` while no image is loaded.
    pub fn render_frame(&self) -> Option<RenderFrame<'_>> {
        let image = self.current.as_deref()?;
        Some(RenderFrame::new(image, *self.adjustments(), self.view))
    }

    /// Renders the current state on `surface` and returns the encoded bytes.
    ///
    /// Returns `Ok(None)` when there is no image or no surface.
    pub fn export(&self, surface: Option<&mut dyn RenderSurface>) -> Result<Option<Vec<u8>>> {
        let Some(surface) = surface else {
            debug!("Export skipped: no render surface");
            return Ok(None);
        };
        let Some(frame) = self.render_frame() else {
            debug!("Export skipped: no image loaded");
            return Ok(None);
        };
        let bytes = surface.render(&frame)?;
        debug!(bytes = bytes.len(), "Exported snapshot");
        Ok(Some(bytes))
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(PresetCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn session() -> EditorSession {
        EditorSession::new(PresetCatalog::builtin())
    }

    fn image() -> RasterImage {
        RasterImage::filled(8, 8, [200, 100, 50, 255]).unwrap()
    }

    /// Surface that records what it was asked to draw.
    #[derive(Default)]
    struct RecordingSurface {
        frames: Vec<(Adjustments, String)>,
    }

    impl RenderSurface for RecordingSurface {
        fn render(&mut self, frame: &RenderFrame<'_>) -> Result<Vec<u8>> {
            self.frames.push((frame.adjustments, frame.chain.to_string()));
            Ok(frame.image.pixels().to_vec())
        }
    }

    struct BrokenSurface;

    impl RenderSurface for BrokenSurface {
        fn render(&mut self, _frame: &RenderFrame<'_>) -> Result<Vec<u8>> {
            Err(Error::render("surface lost"))
        }
    }

    #[test]
    fn new_session_is_empty() {
        let s = session();
        assert!(!s.has_image());
        assert!(s.adjustments().is_neutral());
        assert_eq!(s.active_filter(), None);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.rotation(), 0.0);
        assert_eq!(s.load_state(), &LoadState::Idle);
    }

    #[test]
    fn load_resets_everything() {
        let mut s = session();
        s.set_channel(Channel::Hue, 30.0);
        s.apply_filter("warm");
        s.set_zoom(2.0);
        s.set_rotation(90.0);

        s.load(image());
        assert!(s.has_image());
        assert!(Arc::ptr_eq(s.image().unwrap(), s.original_image().unwrap()));
        assert!(s.adjustments().is_neutral());
        assert_eq!(s.active_filter(), None);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().index(), 0);
        assert_eq!(s.view(), ViewTransform::IDENTITY);
        assert_eq!(s.load_state(), &LoadState::Ready);
    }

    #[test]
    fn edits_work_without_image() {
        let mut s = session();
        s.set_channel(Channel::Blur, 3.0);
        assert!(s.undo());
        assert!(s.redo());
        assert_eq!(s.adjustments().blur, 3.0);
    }

    #[test]
    fn concrete_scenario() {
        let mut s = session();
        s.load(image());
        s.set_channel(Channel::Brightness, 20.0);
        s.set_channel(Channel::Contrast, 10.0);
        assert!(s.apply_filter("noir"));

        let expected = Adjustments {
            brightness: 0.0,
            contrast: 30.0,
            saturation: -100.0,
            exposure: 0.0,
            temperature: 0.0,
            blur: 0.0,
            sharpen: 0.0,
            hue: 0.0,
        };
        assert_eq!(*s.adjustments(), expected);
        assert_eq!(s.active_filter(), Some("noir"));
        assert!(s.can_undo());
        assert!(!s.can_redo());
        assert_eq!(s.history().len(), 4);
    }

    #[test]
    fn visible_vector_tracks_latest_append() {
        let mut s = session();
        s.set_channel(Channel::Exposure, 5.0);
        assert_eq!(s.adjustments(), &s.history().entries().last().unwrap().adjustments);
        assert!(!s.can_redo());

        s.undo();
        s.apply_filter("vivid");
        assert_eq!(s.adjustments(), &s.history().entries().last().unwrap().adjustments);
        assert!(!s.can_redo());
    }

    #[test]
    fn set_channel_accepts_out_of_range_values() {
        let mut s = session();
        s.set_channel(Channel::Brightness, 500.0);
        assert_eq!(s.adjustments().brightness, 500.0);
    }

    #[test]
    fn set_channel_detaches_filter() {
        let mut s = session();
        s.apply_filter("noir");
        // Same value the preset already has; still a manual edit.
        s.set_channel(Channel::Contrast, 30.0);
        assert_eq!(s.active_filter(), None);
        assert_eq!(s.history().len(), 3);
    }

    #[test]
    fn apply_filter_replaces_rather_than_merges() {
        let mut s = session();
        s.set_channel(Channel::Saturation, 50.0);
        s.set_channel(Channel::Contrast, 25.0);
        assert!(s.apply_filter("warm"));

        assert_eq!(s.adjustments().saturation, 10.0);
        assert_eq!(s.adjustments().temperature, 25.0);
        assert_eq!(s.adjustments().contrast, 0.0);
    }

    #[test]
    fn unknown_filter_is_a_no_op() {
        let mut s = session();
        s.set_channel(Channel::Hue, 12.0);
        s.undo();
        let before_len = s.history().len();
        let before_index = s.history().index();

        assert!(!s.apply_filter("sepia"));
        assert_eq!(s.history().len(), before_len);
        assert_eq!(s.history().index(), before_index);
        assert!(s.can_redo());
    }

    #[test]
    fn undo_then_redo_restores_vector() {
        let mut s = session();
        s.set_channel(Channel::Brightness, 10.0);
        s.apply_filter("fade");
        s.set_channel(Channel::Hue, -40.0);

        while s.can_undo() {
            let before = *s.adjustments();
            assert!(s.undo());
            assert!(s.redo());
            assert_eq!(*s.adjustments(), before);
            s.undo();
        }
    }

    #[test]
    fn undo_redo_at_boundaries() {
        let mut s = session();
        assert!(!s.undo());
        assert!(!s.redo());
        assert_eq!(s.history().index(), 0);
    }

    #[test]
    fn truncation_law() {
        let mut s = session();
        s.set_channel(Channel::Brightness, 1.0);
        s.set_channel(Channel::Brightness, 2.0);
        s.set_channel(Channel::Brightness, 3.0);
        assert_eq!(s.history().index(), 3);

        s.undo();
        s.undo();
        s.set_channel(Channel::Contrast, 7.0);

        let trail: Vec<(f32, f32)> = s
            .history()
            .entries()
            .iter()
            .map(|e| (e.adjustments.brightness, e.adjustments.contrast))
            .collect();
        assert_eq!(trail, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 7.0)]);
        assert_eq!(s.history().index(), 2);
    }

    #[test]
    fn reset_appends_at_tail() {
        let mut s = session();
        s.set_channel(Channel::Brightness, 1.0);
        s.set_channel(Channel::Brightness, 2.0);
        s.set_channel(Channel::Brightness, 3.0);
        s.undo();
        s.undo();
        s.set_zoom(2.5);
        s.set_rotation(180.0);

        let len_before = s.history().len();
        s.reset_adjustments();

        assert_eq!(s.history().len(), len_before + 1);
        assert_eq!(s.history().index(), len_before);
        assert!(s.adjustments().is_neutral());
        assert_eq!(s.active_filter(), None);
        assert_eq!(s.view(), ViewTransform::IDENTITY);
        // Entries that were redo history before the reset are still there.
        assert_eq!(s.history().entries()[3].adjustments.brightness, 3.0);
        assert!(s.can_undo());
        assert!(!s.can_redo());
    }

    #[test]
    fn reset_keeps_image() {
        let mut s = session();
        s.load(image());
        s.reset_adjustments();
        assert!(s.has_image());
    }

    #[test]
    fn zoom_and_rotation_are_not_history() {
        let mut s = session();
        s.set_zoom(5.0);
        assert_eq!(s.zoom(), 3.0);
        s.set_zoom(-1.0);
        assert_eq!(s.zoom(), 0.1);
        s.set_rotation(450.0);
        assert_eq!(s.rotation(), 90.0);
        assert_eq!(s.history().len(), 1);
        assert!(!s.can_undo());
    }

    #[test]
    fn undo_restores_filter_of_entry() {
        let mut s = session();
        s.apply_filter("warm");
        s.set_channel(Channel::Blur, 2.0);
        assert_eq!(s.active_filter(), None);

        s.undo();
        assert_eq!(s.active_filter(), Some("warm"));
        s.undo();
        assert_eq!(s.active_filter(), None);
        s.redo();
        assert_eq!(s.active_filter(), Some("warm"));
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut s = session();
        let first = s.begin_load();
        let second = s.begin_load();
        assert_eq!(s.load_state(), &LoadState::Loading { generation: 2 });

        let late = RasterImage::filled(2, 2, [1, 1, 1, 255]).unwrap();
        assert_eq!(s.complete_load(second, image()), LoadOutcome::Applied);
        s.set_channel(Channel::Hue, 10.0);

        assert_eq!(s.complete_load(first, late), LoadOutcome::Stale);
        assert_eq!(s.image().unwrap().dims(), (8, 8));
        assert_eq!(s.adjustments().hue, 10.0);
    }

    #[test]
    fn failed_load_keeps_prior_session() {
        let mut s = session();
        s.load(image());
        s.set_channel(Channel::Contrast, 15.0);

        let ticket = s.begin_load();
        assert_eq!(s.fail_load(ticket, "truncated file"), LoadOutcome::Failed);
        assert!(s.has_image());
        assert_eq!(s.adjustments().contrast, 15.0);
        assert!(matches!(
            s.load_state(),
            LoadState::Failed { generation: 2, message } if message == "truncated file"
        ));
    }

    #[test]
    fn failure_of_stale_load_is_ignored() {
        let mut s = session();
        let first = s.begin_load();
        let _second = s.begin_load();
        assert_eq!(s.fail_load(first, "gone"), LoadOutcome::Stale);
        assert_eq!(s.load_state(), &LoadState::Loading { generation: 2 });
    }

    #[test]
    fn completed_ticket_cannot_be_reused() {
        let mut s = session();
        let ticket = s.begin_load();
        assert_eq!(s.complete_load(ticket, image()), LoadOutcome::Applied);
        s.set_channel(Channel::Hue, 10.0);

        let other = RasterImage::filled(2, 2, [0, 0, 0, 255]).unwrap();
        assert_eq!(s.complete_load(ticket, other), LoadOutcome::Stale);
        assert_eq!(s.fail_load(ticket, "late error"), LoadOutcome::Stale);
        assert_eq!(s.image().unwrap().dims(), (8, 8));
        assert_eq!(s.adjustments().hue, 10.0);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.load_state(), &LoadState::Ready);
    }

    #[test]
    fn failed_ticket_cannot_complete() {
        let mut s = session();
        let ticket = s.begin_load();
        assert_eq!(s.fail_load(ticket, "unreadable"), LoadOutcome::Failed);
        assert_eq!(s.complete_load(ticket, image()), LoadOutcome::Stale);
        assert_eq!(s.fail_load(ticket, "again"), LoadOutcome::Stale);
        assert!(!s.has_image());
        assert!(matches!(
            s.load_state(),
            LoadState::Failed { generation: 1, message } if message == "unreadable"
        ));
    }

    #[test]
    fn relative_view_steps() {
        let mut s = session();
        s.zoom_by(0.1);
        assert!((s.zoom() - 1.1).abs() < 1e-6);
        for _ in 0..40 {
            s.zoom_by(0.1);
        }
        assert_eq!(s.zoom(), 3.0);
        for _ in 0..40 {
            s.zoom_by(-0.1);
        }
        assert_eq!(s.zoom(), 0.1);

        s.rotate_by(90.0);
        s.rotate_by(90.0);
        s.rotate_by(90.0);
        s.rotate_by(90.0);
        assert_eq!(s.rotation(), 0.0);
        s.rotate_by(90.0);

        s.fit_to_screen();
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.rotation(), 90.0);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn export_without_image_or_surface() {
        let mut s = session();
        let mut surface = RecordingSurface::default();
        assert!(s.export(Some(&mut surface)).unwrap().is_none());
        assert!(surface.frames.is_empty());

        s.load(image());
        assert!(s.export(None).unwrap().is_none());
    }

    #[test]
    fn export_renders_current_state() {
        let mut s = session();
        s.load(image());
        s.apply_filter("noir");

        let mut surface = RecordingSurface::default();
        let bytes = s.export(Some(&mut surface)).unwrap().unwrap();
        assert_eq!(bytes.len(), 8 * 8 * 4);
        assert_eq!(surface.frames.len(), 1);
        assert_eq!(surface.frames[0].0.saturation, -100.0);
        assert!(surface.frames[0].1.contains("saturate(0)"));
    }

    #[test]
    fn export_propagates_surface_errors() {
        let mut s = session();
        s.load(image());
        let err = s.export(Some(&mut BrokenSurface)).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn history_limit_from_config() {
        let config = EditorConfig {
            history_limit: Some(2),
            ..EditorConfig::default()
        };
        let mut s = EditorSession::from_config(&config);
        s.set_channel(Channel::Hue, 1.0);
        s.set_channel(Channel::Hue, 2.0);
        assert_eq!(s.history().len(), 2);
        assert!(s.undo());
        assert_eq!(s.adjustments().hue, 1.0);
        assert!(!s.undo());
    }
}
