//! Processing error types.

use std::io;
use std::process::ExitStatus;

/// Errors from external media-tool invocations.
///
/// Each failure mode is a distinct variant so callers can log precisely;
/// none of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    /// The tool process could not be started at all.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    /// The tool ran but exited unsuccessfully.
    #[error("{tool} exited unsuccessfully ({status}): {stderr}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    /// The tool produced output we could not interpret.
    #[error("unparsable ffprobe output: {0}")]
    MalformedOutput(String),

    /// The tool reported no streams for the input file.
    #[error("ffprobe reported no streams")]
    NoStreams,
}

impl From<ProcessingError> for reelvault_core::AppError {
    fn from(err: ProcessingError) -> Self {
        reelvault_core::AppError::Processing(err.to_string())
    }
}
