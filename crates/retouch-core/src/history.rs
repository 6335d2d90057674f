//! Linear undo/redo log of adjustment states.
//!
//! The log is a growable vector plus a cursor. The entry under the cursor is
//! the state the user sees. Pushing while the cursor sits before the tail
//! truncates everything after it first, so redo history is lost on a new
//! edit. [`HistoryLog::append_at_tail`] is the one exception: it appends after
//! the true tail without truncating, which is how a reset is recorded.
//!
//! ```text
//! [v0, v1, v2, v3]  index 3
//! undo, undo        index 1
//! push(v2')         [v0, v1, v2']  index 2
//! ```

use tracing::{debug, trace};

use crate::Adjustments;

/// One recorded edit state.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Adjustment vector at this point.
    pub adjustments: Adjustments,
    /// Preset that produced this entry, `None` for manual edits and resets.
    pub filter: Option<String>,
}

impl HistoryEntry {
    /// Entry reached through manual edits.
    pub fn manual(adjustments: Adjustments) -> Self {
        Self {
            adjustments,
            filter: None,
        }
    }

    /// Entry produced by applying the preset `filter`.
    pub fn preset(adjustments: Adjustments, filter: impl Into<String>) -> Self {
        Self {
            adjustments,
            filter: Some(filter.into()),
        }
    }

    /// The neutral starting entry.
    pub fn neutral() -> Self {
        Self::manual(Adjustments::NEUTRAL)
    }
}

/// Cursor-addressed history of adjustment states.
///
/// Invariants: the log is never empty and `index < len`.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    index: usize,
    limit: Option<usize>,
}

impl HistoryLog {
    /// Creates an unbounded log holding the neutral entry.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Creates a log that keeps at most `limit` entries.
    ///
    /// A limit of zero is treated as one: the current entry is always kept.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: vec![HistoryEntry::neutral()],
            index: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// The entry under the cursor.
    #[inline]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// Cursor position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of recorded entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; the log holds at least one entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// `true` when the cursor can move back.
    #[inline]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// `true` when the cursor can move forward.
    #[inline]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Records a new entry after the cursor, discarding any redo entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        let keep = self.index + 1;
        if keep < self.entries.len() {
            debug!(
                discarded = self.entries.len() - keep,
                index = self.index,
                "Truncating redo history"
            );
            self.entries.truncate(keep);
        }
        self.append_at_tail(entry);
    }

    /// Records a new entry after the last one, keeping redo entries.
    ///
    /// The cursor moves to the new tail.
    pub fn append_at_tail(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
        self.enforce_limit();
        trace!(len = self.entries.len(), index = self.index, "History append");
    }

    /// Moves the cursor back one step.
    ///
    /// Returns the new current entry, or `None` at the start of the log.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Moves the cursor forward one step.
    ///
    /// Returns the new current entry, or `None` at the end of the log.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Drops everything and starts over from the neutral entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.push(HistoryEntry::neutral());
        self.index = 0;
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else { return };
        if self.entries.len() <= limit {
            return;
        }
        let excess = self.entries.len() - limit;
        self.entries.drain(..excess);
        self.index = self.index.saturating_sub(excess);
        debug!(dropped = excess, limit, "History limit reached");
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
