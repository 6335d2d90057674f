//! Render surface that encodes frames to PNG or JPEG.
//!
//! Pixel filtering belongs to the compositor, so the working raster is
//! encoded as-is. PNG output carries the filter chain and the adjustment
//! vector in `tEXt` chunks under [`FILTER_KEY`] and [`ADJUSTMENTS_KEY`].

use std::time::Instant;

use retouch_core::{ExportFormat, ExportOptions, RenderFrame, RenderSurface};
use tracing::debug;

use crate::IoResult;

/// `tEXt` keyword holding the compositor filter chain.
pub const FILTER_KEY: &str = "retouch:filter";

/// `tEXt` keyword holding the adjustment vector.
pub const ADJUSTMENTS_KEY: &str = "retouch:adjustments";

/// Encodes one frame with `options`.
pub fn encode_frame(frame: &RenderFrame<'_>, options: &ExportOptions) -> IoResult<Vec<u8>> {
    let start = Instant::now();
    let bytes = match options.format {
        ExportFormat::Png => {
            let chain = frame.chain.to_string();
            let adjustments = frame.adjustments.to_string();
            crate::png::encode(
                frame.image,
                &[(FILTER_KEY, &chain), (ADJUSTMENTS_KEY, &adjustments)],
            )?
        }
        ExportFormat::Jpeg => crate::jpeg::encode(frame.image, options.quality)?,
    };
    debug!(
        format = %options.format,
        bytes = bytes.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Encoded frame"
    );
    Ok(bytes)
}

/// [`RenderSurface`] producing encoded image files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodingSurface {
    options: ExportOptions,
}

impl EncodingSurface {
    /// Surface encoding with `options`.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Current encoding options.
    pub fn options(&self) -> ExportOptions {
        self.options
    }
}

impl RenderSurface for EncodingSurface {
    fn render(&mut self, frame: &RenderFrame<'_>) -> retouch_core::Result<Vec<u8>> {
        Ok(encode_frame(frame, &self.options)?)
    }
}
