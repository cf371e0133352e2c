//! Pipeline error type.

use thiserror::Error;

/// Fatal errors from the reconciliation pipeline.
///
/// Per-asset failures are not errors; they are collected into the run report
/// and the pipeline keeps going.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
