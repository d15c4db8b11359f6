//! Result types for command execution

use crate::subprocess::{ProcessError, ProcessOutput};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Success,
    Failure,
    Skipped,
}

/// The command definition a result refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRef {
    pub name: String,
}

impl CommandRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result from executing a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// The command that produced this result
    pub command: CommandRef,

    pub status: StepStatus,

    /// Standard output if captured
    pub stdout: Option<String>,

    /// Error output; absent or empty on most successes
    pub stderr: Option<String>,

    /// Exit code if the command was a process
    pub exit_code: Option<i32>,

    #[serde(default, with = "humantime_serde")]
    pub duration: Option<Duration>,
}

impl CommandResult {
    fn new(name: impl Into<String>, status: StepStatus) -> Self {
        Self {
            command: CommandRef::new(name),
            status,
            stdout: None,
            stderr: None,
            exit_code: None,
            duration: None,
        }
    }

    /// Creates a successful result
    pub fn success(name: impl Into<String>) -> Self {
        Self::new(name, StepStatus::Success)
    }

    /// Creates a failed result carrying the given error text
    pub fn failure(name: impl Into<String>, stderr: impl Into<String>) -> Self {
        let mut result = Self::new(name, StepStatus::Failure);
        result.stderr = Some(stderr.into());
        result
    }

    /// Creates a result for a step that did not run
    pub fn skipped(name: impl Into<String>) -> Self {
        Self::new(name, StepStatus::Skipped)
    }

    /// Creates a result from process output; status follows the exit status
    pub fn from_output(name: impl Into<String>, output: ProcessOutput) -> Self {
        let status = if output.status.success() {
            StepStatus::Success
        } else {
            StepStatus::Failure
        };
        Self {
            command: CommandRef::new(name),
            status,
            exit_code: output.status.code(),
            stdout: Some(output.stdout),
            stderr: Some(output.stderr),
            duration: Some(output.duration),
        }
    }

    /// Sets the execution duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Name of the command that produced this result
    pub fn name(&self) -> &str {
        &self.command.name
    }

    /// Checks if the result indicates success
    pub fn is_success(&self) -> bool {
        self.status == StepStatus::Success
    }

    /// Checks if the result indicates failure
    pub fn is_failure(&self) -> bool {
        self.status == StepStatus::Failure
    }

    /// Error output, or `""` when none was captured
    pub fn stderr_text(&self) -> &str {
        self.stderr.as_deref().unwrap_or_default()
    }
}

/// A command could not be invoked
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Execution error in '{command}': {message}")]
    Execution { command: String, message: String },

    #[error("Failed to run '{command}': {source}")]
    Process {
        command: String,
        #[source]
        source: ProcessError,
    },
}

impl CommandError {
    /// Creates an execution error for `command`
    pub fn execution(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Name of the command whose invocation failed
    pub fn command(&self) -> &str {
        match self {
            Self::Execution { command, .. } | Self::Process { command, .. } => command,
        }
    }
}
