//! Script replay command.

use crate::ReplayArgs;
use anyhow::Result;
use retouch_core::{EditorConfig, EditorSession};
use serde_json::json;
use tracing::info;

use super::SessionReport;

/// Replays a script on an empty session and prints the resulting state.
pub fn run(args: ReplayArgs, config: &EditorConfig) -> Result<()> {
    let script = super::load_script(&args.script, args.clamp)?;
    let mut session = EditorSession::from_config(config);
    let summary = script.apply(&mut session);
    info!(applied = summary.applied, ignored = summary.ignored, "Script replayed");

    let report = SessionReport::new(&session);
    if args.json {
        let out = json!({
            "session": report,
            "applied": summary.applied,
            "ignored": summary.ignored,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        report.print_text();
        println!(
            "Ops:          {} applied, {} ignored",
            summary.applied, summary.ignored
        );
    }
    Ok(())
}
