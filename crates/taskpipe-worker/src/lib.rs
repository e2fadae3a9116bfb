//! Taskpipe Worker
//!
//! Worker-side harness for the stdio task contract. The orchestrator spawns
//! one worker process per task, writes the task JSON to the worker's stdin,
//! and parses a single result JSON line from its stdout.
//!
//! This crate owns that loop: reading the input to EOF, parsing the task,
//! the top-level error boundary, and emitting exactly one result line.
//! Success or failure, the caller always gets well-formed JSON back. Task
//! logic plugs in through [`TaskHandler`].

mod env;
mod error;
mod handler;
mod worker;

pub use env::WorkerEnv;
pub use error::WorkerError;
pub use handler::{HandlerError, TaskHandler, TaskOutput};
pub use worker::run;
