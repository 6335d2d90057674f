//! Recorded edit sequences.
//!
//! An edit script is a YAML list of operations replayed in order against a
//! session:
//!
//! ```yaml
//! - { op: set, channel: brightness, value: 20 }
//! - { op: filter, id: noir }
//! - { op: undo }
//! - { op: zoom, factor: 1.5 }
//! - { op: rotate_by, degrees: 90 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Channel, EditorSession, Result};

/// One mutating or navigating session operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Replace one channel.
    Set {
        /// Channel to change.
        channel: Channel,
        /// New value.
        value: f32,
    },
    /// Apply a preset by identifier.
    Filter {
        /// Preset identifier.
        id: String,
    },
    /// Step back.
    Undo,
    /// Step forward.
    Redo,
    /// Neutral adjustments and identity view.
    Reset,
    /// Set the zoom factor.
    Zoom {
        /// Requested factor.
        factor: f32,
    },
    /// Set the rotation.
    Rotate {
        /// Requested angle in degrees.
        degrees: f32,
    },
    /// Change the zoom by a step.
    ZoomBy {
        /// Amount added to the current factor.
        delta: f32,
    },
    /// Rotate relative to the current angle.
    RotateBy {
        /// Degrees added to the current rotation.
        degrees: f32,
    },
    /// Back to 1x zoom.
    Fit,
}

impl EditOp {
    /// Runs this op on `session`. Returns `false` if it was a no-op
    /// (unknown preset, undo/redo at a boundary).
    pub fn apply(&self, session: &mut EditorSession) -> bool {
        match *self {
            Self::Set { channel, value } => {
                session.set_channel(channel, value);
                true
            }
            Self::Filter { ref id } => session.apply_filter(id),
            Self::Undo => session.undo(),
            Self::Redo => session.redo(),
            Self::Reset => {
                session.reset_adjustments();
                true
            }
            Self::Zoom { factor } => {
                session.set_zoom(factor);
                true
            }
            Self::Rotate { degrees } => {
                session.set_rotation(degrees);
                true
            }
            Self::ZoomBy { delta } => {
                session.zoom_by(delta);
                true
            }
            Self::RotateBy { degrees } => {
                session.rotate_by(degrees);
                true
            }
            Self::Fit => {
                session.fit_to_screen();
                true
            }
        }
    }
}

/// How many ops of a replay took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReplaySummary {
    /// Ops that changed session state.
    pub applied: usize,
    /// Ops that were soft no-ops.
    pub ignored: usize,
}

/// Ordered list of [`EditOp`]s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Wraps a list of ops.
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    /// Parses a YAML list.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let script: Self = serde_yaml::from_str(yaml)?;
        debug!(ops = script.ops.len(), "Parsed edit script");
        Ok(script)
    }

    /// Reads and parses a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading edit script");
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Ops in replay order.
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Number of ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the script has no ops.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns a copy with every `set` value clamped to its channel's
    /// slider range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        for op in &mut self.ops {
            if let EditOp::Set { channel, value } = op {
                *value = channel.range().clamp(*value);
            }
        }
        self
    }

    /// Replays every op against `session`, in order.
    pub fn apply(&self, session: &mut EditorSession) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for (i, op) in self.ops.iter().enumerate() {
            if op.apply(session) {
                summary.applied += 1;
            } else {
                trace!(index = i, ?op, "Op had no effect");
                summary.ignored += 1;
            }
        }
        debug!(
            applied = summary.applied,
            ignored = summary.ignored,
            "Replayed edit script"
        );
        summary
    }
}

impl From<Vec<EditOp>> for EditScript {
    fn from(ops: Vec<EditOp>) -> Self {
        Self::new(ops)
    }
}
