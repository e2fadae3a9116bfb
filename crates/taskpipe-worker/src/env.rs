//! Environment the orchestrator provides to spawned workers.

use std::env;

/// Variables the orchestrator sets when it spawns a worker process.
///
/// All of them are optional; a worker run by hand sees none of them. They
/// carry the same identifiers as the task on stdin and are read once at
/// startup for log context only; the result is always derived from the task
/// itself.
#[derive(Debug, Clone, Default)]
pub struct WorkerEnv {
  pub task_type: Option<String>,
  pub task_id: Option<String>,
  pub workflow_id: Option<String>,
  pub execution_id: Option<String>,
  pub poll_domain: Option<String>,
  pub server_url: Option<String>,
}

impl WorkerEnv {
  /// Capture the worker environment from the current process.
  pub fn from_env() -> Self {
    Self {
      task_type: var("TASK_TYPE"),
      task_id: var("TASK_ID"),
      workflow_id: var("WORKFLOW_ID"),
      execution_id: var("EXECUTION_ID"),
      poll_domain: var("POLL_DOMAIN"),
      server_url: var("CONDUCTOR_SERVER_URL"),
    }
  }
}

fn var(key: &str) -> Option<String> {
  env::var(key).ok().filter(|value| !value.is_empty())
}
