//! Preset listing command.

use crate::PresetsArgs;
use anyhow::Result;
use retouch_core::EditorConfig;
use serde_json::json;

/// Lists the catalog in order, with each preset's filter chain.
pub fn run(args: PresetsArgs, config: &EditorConfig) -> Result<()> {
    let catalog = &config.presets;

    if args.json {
        let presets: Vec<_> = catalog
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "adjustments": p.adjustments,
                    "filter_chain": p.preview_chain().to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    let width = catalog.ids().map(str::len).max().unwrap_or(0);
    for preset in catalog {
        println!("{:<width$}  {}", preset.id, preset.name);
        println!("{:<width$}  {}", "", preset.preview_chain());
    }
    Ok(())
}
