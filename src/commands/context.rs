//! Execution context shared by every sub-command in a round

use super::{CommandError, CommandResult, SubCommand};
use crate::subprocess::{ProcessRunner, TokioProcessRunner};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Instrument;

/// The environment sub-commands are invoked against.
///
/// Implementations are shared read-only across all concurrently running
/// commands of a round.
#[async_trait]
pub trait InvocationContext: Send + Sync {
    /// What the caller hands over to identify a command
    type Handle: Send + Sync;

    /// What a single invocation produces
    type Output: Send;

    /// Display path of the current command chain, used for log prefixing
    fn command_path(&self) -> &str;

    /// Invokes one command and returns its payload
    async fn invoke(&self, handle: &Self::Handle) -> Result<Self::Output, CommandError>;
}

/// Context provided to sub-commands during execution
#[derive(Clone)]
pub struct ExecutionContext {
    /// Display path, e.g. `fanout run`
    pub command_path: String,

    /// Working directory for spawned processes
    pub working_dir: PathBuf,

    /// Environment variables added on top of the inherited environment
    pub env_vars: HashMap<String, String>,

    /// Runner used to spawn processes
    pub runner: Arc<dyn ProcessRunner>,
}

impl ExecutionContext {
    /// Creates a context that spawns real processes
    pub fn new(command_path: impl Into<String>, working_dir: PathBuf) -> Self {
        Self {
            command_path: command_path.into(),
            working_dir,
            env_vars: HashMap::new(),
            runner: Arc::new(TokioProcessRunner),
        }
    }

    /// Sets the process runner
    pub fn with_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Adds an environment variable for every spawned process
    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Sets the working directory for spawned processes
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }
}

#[async_trait]
impl InvocationContext for ExecutionContext {
    type Handle = Arc<dyn SubCommand>;
    type Output = CommandResult;

    fn command_path(&self) -> &str {
        &self.command_path
    }

    async fn invoke(&self, handle: &Arc<dyn SubCommand>) -> Result<CommandResult, CommandError> {
        let span = tracing::info_span!("subcommand", name = handle.name());
        async {
            tracing::debug!("Invoking {} {}", self.command_path, handle.name());
            let result = handle.execute(self).await;
            match &result {
                Ok(outcome) => tracing::debug!("Finished with status {:?}", outcome.status),
                Err(e) => tracing::warn!("Invocation failed: {}", e),
            }
            result
        }
        .instrument(span)
        .await
    }
}
