use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskpipe_worker::{WorkerEnv, run};

mod greet;

use greet::GreetHandler;

/// Stdio greeting worker for a task-orchestration CLI.
///
/// Reads one task JSON object from stdin and writes one result JSON line to
/// stdout. The orchestrator spawns one process per task.
#[derive(Parser)]
#[command(name = "greet-worker")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Read the task from a file instead of stdin
  #[arg(long)]
  input: Option<PathBuf>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // Stdout carries exactly one result line, so all logging goes to stderr.
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "greet_worker=info,taskpipe_worker=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let env = WorkerEnv::from_env();
  debug!(?env, "worker environment");

  let stdout = io::stdout();
  let result = match cli.input {
    Some(path) => {
      let file = File::open(&path)
        .with_context(|| format!("failed to open task file: {}", path.display()))?;
      run(&GreetHandler, file, stdout.lock())
    }
    None => run(&GreetHandler, io::stdin().lock(), stdout.lock()),
  };

  // The orchestrator parses stdout, not exit codes. A failed emit can only
  // be logged; the exit stays clean either way.
  if let Err(e) = result {
    error!(error = %e, "failed to emit result");
  }

  Ok(())
}
