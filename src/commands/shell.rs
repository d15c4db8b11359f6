//! Sub-command that runs a single external program

use super::{CommandError, CommandResult, ExecutionContext, SubCommand};
use crate::subprocess::{ProcessCommand, ProcessError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Runs `program args...` through the context's process runner
#[derive(Debug, Clone)]
pub struct ShellCommand {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl ShellCommand {
    /// Creates a command running `program` without arguments
    pub fn new(name: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            timeout: None,
        }
    }

    /// Sets the program arguments
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an environment variable, overriding the context's value
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Sets a time limit after which the command counts as failed
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn process_command(&self, context: &ExecutionContext) -> ProcessCommand {
        // Command-level variables take precedence over the context's
        let mut env = context.env_vars.clone();
        env.extend(self.env.clone());

        ProcessCommand {
            program: self.program.clone(),
            args: self.args.clone(),
            env,
            working_dir: Some(context.working_dir.clone()),
            timeout: self.timeout,
        }
    }
}

#[async_trait]
impl SubCommand for ShellCommand {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, context: &ExecutionContext) -> Result<CommandResult, CommandError> {
        let command = self.process_command(context);
        let start = Instant::now();

        match context.runner.run(command).await {
            Ok(output) => Ok(CommandResult::from_output(&self.name, output)),
            Err(ProcessError::Timeout(limit)) => Ok(CommandResult::failure(
                &self.name,
                format!("timed out after {limit:?}"),
            )
            .with_duration(start.elapsed())),
            Err(source) => Err(CommandError::Process {
                command: self.name.clone(),
                source,
            }),
        }
    }
}
