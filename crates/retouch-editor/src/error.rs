//! Editor shell errors.

use std::io;
use thiserror::Error;

/// Errors raised by [`Editor`](crate::Editor).
#[derive(Debug, Error)]
pub enum EditorError {
    /// The worker thread could not be started.
    #[error("failed to spawn editor worker: {0}")]
    Spawn(#[source] io::Error),

    /// The worker thread is gone.
    #[error("editor worker disconnected")]
    Disconnected,
}

/// Result type for editor shell operations.
pub type EditorResult<T> = Result<T, EditorError>;
