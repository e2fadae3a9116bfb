//! The greeting task handler.

use serde_json::{Map, Value};

use taskpipe_protocol::Task;
use taskpipe_worker::{HandlerError, TaskHandler, TaskOutput};

/// Builds a greeting from the task's `name` input.
///
/// Output keys are `message`, `taskId`, and `workflowId`. The workflow
/// identifier arrives as `workflowInstanceId` but is reported back under
/// `workflowId`, which is the key the orchestrator expects.
pub struct GreetHandler;

impl TaskHandler for GreetHandler {
  fn execute(&self, task: &Task) -> Result<TaskOutput, HandlerError> {
    let name = task.name();
    let message = format!("Hello, {}!", name);

    let mut output = Map::new();
    output.insert("message".to_string(), Value::String(message));
    output.insert(
      "taskId".to_string(),
      Value::String(task.task_id().to_string()),
    );
    output.insert(
      "workflowId".to_string(),
      Value::String(task.workflow_instance_id().to_string()),
    );

    Ok(TaskOutput {
      output,
      logs: vec![format!("Generated greeting for {}", name)],
    })
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use taskpipe_protocol::TaskStatus;
  use taskpipe_worker::run;

  use super::*;

  fn run_worker(input: &[u8]) -> (taskpipe_protocol::TaskResult, Vec<u8>) {
    let mut out = Vec::new();
    let result = run(&GreetHandler, input, &mut out).expect("emit should succeed");
    (result, out)
  }

  #[test]
  fn test_greets_named_caller() {
    let input = br#"{"taskId":"t1","workflowInstanceId":"w1","taskType":"greet","inputData":{"name":"Bob"}}"#;
    let (_, out) = run_worker(&input[..]);

    let expected = concat!(
      r#"{"status":"COMPLETED","#,
      r#""output":{"message":"Hello, Bob!","taskId":"t1","workflowId":"w1"},"#,
      r#""logs":["Processing task t1 of type greet","Workflow: w1","Generated greeting for Bob"]}"#,
      "\n"
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
  }

  #[test]
  fn test_greets_alice() {
    let input = br#"{"inputData":{"name":"Alice"}}"#;
    let (result, _) = run_worker(&input[..]);

    let output = result.output.unwrap();
    assert_eq!(output["message"], json!("Hello, Alice!"));
  }

  #[test]
  fn test_empty_task_greets_world() {
    let (result, _) = run_worker(&b"{}"[..]);

    assert_eq!(result.status, TaskStatus::Completed);

    let output = result.output.unwrap();
    assert_eq!(output["message"], json!("Hello, World!"));
    assert_eq!(output["taskId"], json!("unknown"));
    assert_eq!(output["workflowId"], json!("unknown"));
    assert_eq!(result.logs.len(), 3);
  }

  #[test]
  fn test_non_object_input_data_fails() {
    let (result, out) = run_worker(&br#"{"inputData":"not-an-object"}"#[..]);

    assert_eq!(result.status, TaskStatus::Failed);
    assert!(result.reason.is_some());
    assert_eq!(result.logs.len(), 1);

    let line: serde_json::Value =
      serde_json::from_slice(&out[..out.len() - 1]).expect("failure output should be JSON");
    assert_eq!(line["status"], "FAILED");
  }

  #[test]
  fn test_workflow_id_mirrors_workflow_instance_id() {
    let input = br#"{"workflowInstanceId":"wf-42"}"#;
    let (result, _) = run_worker(&input[..]);

    let output = result.output.unwrap();
    assert_eq!(output["workflowId"], json!("wf-42"));
    assert!(!output.contains_key("workflowInstanceId"));
  }

  #[test]
  fn test_repeated_runs_are_byte_identical() {
    let input = br#"{"taskId":"t1","inputData":{"name":"Ada"}}"#;

    let (_, first) = run_worker(&input[..]);
    let (_, second) = run_worker(&input[..]);

    assert_eq!(first, second);
  }
}
