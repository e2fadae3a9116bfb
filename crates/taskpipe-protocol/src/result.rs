//! Outgoing result record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Task state reported back to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
  Completed,
  Failed,
  /// Accepted by the orchestrator for long-running tasks. A single-pass
  /// stdio worker never emits it.
  InProgress,
}

/// The single JSON line a worker writes to stdout.
///
/// `output` is only present on success, `reason` only on failure. `logs` is
/// omitted from the wire when empty, matching the orchestrator's own
/// encoding of the result. [`Map`] keeps key order deterministic, so the
/// same task always serializes to the same bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
  pub status: TaskStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub output: Option<Map<String, Value>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub logs: Vec<String>,
}

impl TaskResult {
  /// A successful result carrying the handler's output and log lines.
  pub fn completed(output: Map<String, Value>, logs: Vec<String>) -> Self {
    Self {
      status: TaskStatus::Completed,
      output: Some(output),
      reason: None,
      logs,
    }
  }

  /// A failure result. Carries the reason and a single matching log line.
  pub fn failed(reason: impl Into<String>) -> Self {
    let reason = reason.into();
    let logs = vec![format!("Error processing task: {}", reason)];

    Self {
      status: TaskStatus::Failed,
      output: None,
      reason: Some(reason),
      logs,
    }
  }
}
