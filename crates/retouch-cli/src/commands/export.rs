//! Export command: load, replay, encode.

use crate::ExportArgs;
use anyhow::{Context, Result, bail};
use retouch_core::{EditorConfig, ExportFormat, ExportOptions};
use retouch_editor::{Editor, EditorUpdate};
use retouch_io::{Format, ImageSource};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for the worker before giving up.
const WORKER_TIMEOUT: Duration = Duration::from_secs(120);

/// Loads the input through the editor, replays the script and writes the
/// export.
pub fn run(args: ExportArgs, config: &EditorConfig) -> Result<()> {
    let script = super::load_script(&args.script, args.clamp)?;
    let options = export_options(&args, config);

    let input_format = input_format(&args.input)?;
    let mut editor = Editor::new(config).context("Failed to start editor")?;

    editor.load(ImageSource::path(&args.input))?;
    match next_update(&mut editor)? {
        EditorUpdate::Loaded { width, height, .. } => {
            info!(
                path = %args.input.display(),
                format = input_format.name(),
                width,
                height,
                "Loaded"
            );
        }
        EditorUpdate::LoadFailed { message, .. } => {
            bail!("Failed to load: {}: {}", args.input.display(), message);
        }
        other => bail!("Unexpected worker event: {other:?}"),
    }

    let summary = editor.replay(&script);
    debug!(applied = summary.applied, ignored = summary.ignored, "Script replayed");

    let Some(request) = editor.request_export(options)? else {
        bail!("Nothing to export: no image loaded");
    };

    let bytes = match next_update(&mut editor)? {
        EditorUpdate::Exported { request: done, bytes } if done == request => bytes,
        EditorUpdate::ExportFailed { message, .. } => bail!("Export failed: {message}"),
        other => bail!("Unexpected worker event: {other:?}"),
    };

    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    println!(
        "{} -> {} ({}, {} bytes)",
        args.input.display(),
        args.output.display(),
        options.format,
        bytes.len()
    );
    println!("  {}", editor.session().filter_chain());
    Ok(())
}

/// Input format from the extension, else from the leading bytes.
fn input_format(path: &Path) -> Result<Format> {
    let format = Format::from_extension(path);
    if format != Format::Unknown {
        return Ok(format);
    }
    let mut head = [0u8; 8];
    let mut file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let n = file
        .read(&mut head)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    match Format::from_bytes(&head[..n]) {
        Format::Unknown => bail!("Unsupported input format: {}", path.display()),
        format => Ok(format),
    }
}

/// Format from the flag, then the output extension, then the config.
fn export_options(args: &ExportArgs, config: &EditorConfig) -> ExportOptions {
    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&args.output))
        .unwrap_or(config.export.format);
    let quality = args.quality.unwrap_or(config.export.quality);
    ExportOptions::new(format).with_quality(quality)
}

fn next_update(editor: &mut Editor) -> Result<EditorUpdate> {
    match editor.wait(WORKER_TIMEOUT)? {
        Some(update) => Ok(update),
        None => bail!("Timed out waiting for the editor worker"),
    }
}
