//! CLI command implementations

pub mod export;
pub mod presets;
pub mod replay;

use anyhow::{Context, Result};
use retouch_core::{EditScript, EditorConfig, EditorSession};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Loads the editor config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => {
            let config = EditorConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            info!(path = %path.display(), presets = config.presets.len(), "Loaded config");
            Ok(config)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Loads an edit script, optionally clamping its `set` values.
pub fn load_script(path: &Path, clamp: bool) -> Result<EditScript> {
    let script = EditScript::from_file(path)
        .with_context(|| format!("Failed to load script: {}", path.display()))?;
    Ok(if clamp { script.clamped() } else { script })
}

/// Snapshot of a session for printing.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub adjustments: retouch_core::Adjustments,
    pub filter_chain: String,
    pub active_filter: Option<String>,
    pub history_len: usize,
    pub history_index: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub zoom: f32,
    pub rotation: f32,
}

impl SessionReport {
    pub fn new(session: &EditorSession) -> Self {
        Self {
            adjustments: *session.adjustments(),
            filter_chain: session.filter_chain().to_string(),
            active_filter: session.active_filter().map(str::to_string),
            history_len: session.history().len(),
            history_index: session.history().index(),
            can_undo: session.can_undo(),
            can_redo: session.can_redo(),
            zoom: session.zoom(),
            rotation: session.rotation(),
        }
    }

    /// Prints in human-readable text format.
    pub fn print_text(&self) {
        println!("Adjustments:");
        for (channel, value) in self.adjustments.iter() {
            println!("  {:<12} {}", channel.label(), value);
        }
        println!("Filter:       {}", self.active_filter.as_deref().unwrap_or("-"));
        println!("Chain:        {}", self.filter_chain);
        println!(
            "History:      {}/{} (undo: {}, redo: {})",
            self.history_index + 1,
            self.history_len,
            yes_no(self.can_undo),
            yes_no(self.can_redo)
        );
        println!("Zoom:         {}", self.zoom);
        println!("Rotation:     {}", self.rotation);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
