//! Single-pass task processing.

use std::io::{Read, Write};

use tracing::{error, info};

use taskpipe_protocol::{Task, TaskResult};

use crate::error::WorkerError;
use crate::handler::{TaskHandler, TaskOutput};

/// Process exactly one task.
///
/// Reads `reader` to EOF, parses the task, runs `handler`, and writes one
/// result line to `writer`. Read, parse, and handler failures are converted
/// into a FAILED result on `writer`, so the caller of the worker always
/// receives well-formed JSON. Only a failure to emit the line itself is
/// returned as an error.
///
/// Returns the result that was written.
pub fn run<H: TaskHandler>(
  handler: &H,
  mut reader: impl Read,
  mut writer: impl Write,
) -> Result<TaskResult, WorkerError> {
  let result = match process(handler, &mut reader) {
    Ok(result) => result,
    Err(e) => {
      error!(error = %e, "task failed");
      TaskResult::failed(e.to_string())
    }
  };

  emit(&result, &mut writer)?;
  Ok(result)
}

/// Read, parse, and handle one task.
fn process<H: TaskHandler>(
  handler: &H,
  reader: &mut impl Read,
) -> Result<TaskResult, WorkerError> {
  let mut input = String::new();
  reader
    .read_to_string(&mut input)
    .map_err(|e| WorkerError::Read { source: e })?;

  let task = Task::from_slice(input.as_bytes()).map_err(|e| WorkerError::Parse {
    message: e.to_string(),
  })?;

  info!(
    task_id = task.task_id(),
    task_type = task.task_type(),
    workflow_id = task.workflow_instance_id(),
    "task started"
  );

  let TaskOutput { output, logs } = handler.execute(&task)?;

  let mut all_logs = vec![
    format!(
      "Processing task {} of type {}",
      task.task_id(),
      task.task_type()
    ),
    format!("Workflow: {}", task.workflow_instance_id()),
  ];
  all_logs.extend(logs);

  info!(task_id = task.task_id(), "task completed");

  Ok(TaskResult::completed(output, all_logs))
}

/// Write the single result line.
fn emit(result: &TaskResult, writer: &mut impl Write) -> Result<(), WorkerError> {
  let line = serde_json::to_string(result).map_err(|e| WorkerError::Serialize {
    message: e.to_string(),
  })?;

  writeln!(writer, "{}", line).map_err(|e| WorkerError::Write { source: e })?;
  writer.flush().map_err(|e| WorkerError::Write { source: e })
}
