//! The seam between the harness and task logic.

use serde_json::{Map, Value};
use thiserror::Error;

use taskpipe_protocol::Task;

/// Output produced by a handler for one task.
#[derive(Debug, Clone, Default)]
pub struct TaskOutput {
  /// Key/value payload forwarded to the orchestrator as `output`.
  pub output: Map<String, Value>,

  /// Handler log lines, appended after the harness's standard lines.
  pub logs: Vec<String>,
}

/// Failure reported by a task handler.
///
/// There is a single category: the message becomes the `reason` of the
/// FAILED result.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
  message: String,
}

impl HandlerError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}

/// Task logic invoked by the harness.
///
/// Implementations are synchronous transforms of one task into one output.
/// The harness owns all I/O and the error boundary around the call, so a
/// handler never needs to touch stdin or stdout.
pub trait TaskHandler {
  fn execute(&self, task: &Task) -> Result<TaskOutput, HandlerError>;
}
