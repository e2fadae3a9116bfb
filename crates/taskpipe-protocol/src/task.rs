//! Incoming task record.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Fallback for task identifiers the orchestrator did not provide.
pub const UNKNOWN: &str = "unknown";

/// Fallback for the `name` input of the greeting contract.
pub const DEFAULT_NAME: &str = "World";

/// One unit of work, handed to the worker on stdin.
///
/// The orchestrator serializes its full task model; only the fields below are
/// part of the worker contract and everything else is ignored. Every field is
/// optional; a worker must produce a result even for `{}`.
///
/// Raw fields are kept private; the accessors return the resolved values
/// (empty strings count as missing, matching how the orchestrator treats
/// unset identifiers).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  #[serde(default)]
  task_id: String,
  #[serde(default)]
  workflow_instance_id: String,
  #[serde(default)]
  task_type: String,
  #[serde(default)]
  input_data: HashMap<String, Value>,
}

impl Task {
  /// Parse a task from raw input bytes.
  pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
    serde_json::from_slice(bytes)
  }

  /// Task ID, `"unknown"` when missing or empty.
  pub fn task_id(&self) -> &str {
    resolve(&self.task_id)
  }

  /// Workflow instance ID, `"unknown"` when missing or empty.
  pub fn workflow_instance_id(&self) -> &str {
    resolve(&self.workflow_instance_id)
  }

  /// Task type, `"unknown"` when missing or empty.
  pub fn task_type(&self) -> &str {
    resolve(&self.task_type)
  }

  /// Look up an input value by key.
  pub fn input(&self, key: &str) -> Option<&Value> {
    self.input_data.get(key)
  }

  /// The `name` input, `"World"` when missing, empty, or not a string.
  pub fn name(&self) -> &str {
    match self.input("name") {
      Some(Value::String(name)) if !name.is_empty() => name,
      _ => DEFAULT_NAME,
    }
  }
}

fn resolve(field: &str) -> &str {
  if field.is_empty() { UNKNOWN } else { field }
}
