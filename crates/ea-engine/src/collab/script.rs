//! Scripting collaborator.
//!
//! Scripts run in an external interpreter process. Whatever happens inside
//! the script stays there: the game only logs the outcome.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Interpreter used when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Runs an external script for its side effects.
pub trait ScriptRunner: std::fmt::Debug {
    /// Run the script at `path` once. Failures are handled internally.
    fn execute_script(&mut self, path: &Path);
}

/// What happened when a script was run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// The interpreter exited successfully.
    Completed,
    /// The interpreter exited with a failure status (code, if any).
    Failed(Option<i32>),
    /// The script file does not exist; nothing was run.
    Skipped,
    /// The interpreter could not be started.
    SpawnFailed(String),
}

impl std::fmt::Display for ScriptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Failed(Some(code)) => write!(f, "failed with exit code {code}"),
            Self::Failed(None) => write!(f, "terminated by signal"),
            Self::Skipped => write!(f, "skipped (file not found)"),
            Self::SpawnFailed(reason) => write!(f, "could not start interpreter: {reason}"),
        }
    }
}

/// Runs scripts by spawning `<interpreter> <path>` and waiting for it.
#[derive(Debug, Clone)]
pub struct ProcessScriptRunner {
    interpreter: PathBuf,
}

impl Default for ProcessScriptRunner {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl ProcessScriptRunner {
    /// Create a runner using the given interpreter program.
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// The interpreter program.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Run the script and report the outcome.
    ///
    /// The child gets a null stdin so it cannot consume game input.
    pub fn run(&self, path: &Path) -> ScriptOutcome {
        if !path.is_file() {
            return ScriptOutcome::Skipped;
        }

        let status = Command::new(&self.interpreter)
            .arg(path)
            .stdin(Stdio::null())
            .status();

        match status {
            Ok(s) if s.success() => ScriptOutcome::Completed,
            Ok(s) => ScriptOutcome::Failed(s.code()),
            Err(e) => ScriptOutcome::SpawnFailed(e.to_string()),
        }
    }
}

impl ScriptRunner for ProcessScriptRunner {
    fn execute_script(&mut self, path: &Path) {
        let outcome = self.run(path);
        let script = path.display();
        match outcome {
            ScriptOutcome::Completed => tracing::info!(%script, "script {outcome}"),
            _ => tracing::warn!(
                %script,
                interpreter = %self.interpreter.display(),
                "script {outcome}"
            ),
        }
    }
}

/// A runner that never runs anything.
#[derive(Debug, Default)]
pub struct NoopScriptRunner;

impl ScriptRunner for NoopScriptRunner {
    fn execute_script(&mut self, path: &Path) {
        tracing::debug!(script = %path.display(), "scripting disabled");
    }
}
