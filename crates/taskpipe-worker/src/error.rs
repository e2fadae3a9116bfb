//! Worker harness errors.

use thiserror::Error;

use crate::handler::HandlerError;

/// Errors that can occur while processing a single task.
///
/// Everything up to emission is translated into a FAILED result on stdout,
/// with the error's display text as the `reason`; only a failure to write
/// the result line itself reaches the caller.
#[derive(Debug, Error)]
pub enum WorkerError {
  /// Failed to read the task from the input stream.
  #[error("failed to read task input: {source}")]
  Read {
    #[source]
    source: std::io::Error,
  },

  /// The input was not a valid task JSON object.
  #[error("failed to parse task JSON: {message}")]
  Parse { message: String },

  /// The handler reported a failure.
  #[error("{0}")]
  Handler(#[from] HandlerError),

  /// Failed to serialize the result.
  #[error("failed to serialize result: {message}")]
  Serialize { message: String },

  /// Failed to write the result line.
  #[error("failed to write result: {source}")]
  Write {
    #[source]
    source: std::io::Error,
  },
}
