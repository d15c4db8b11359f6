//! Run command implementation
//!
//! Loads the config, fans the selected commands out concurrently and writes
//! the report through the tracing sink.

use crate::commands::{CommandResult, ExecutionContext, InvocationContext, SubCommand};
use crate::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use crate::invoker::invoke_all;
use crate::report::{log_results, LogOptions, LogSink, TracingSink};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Invocation of this command as typed by the user
pub const RUN_COMMAND_PATH: &str = "fanout run";

pub struct RunArgs {
    pub config: PathBuf,
    pub list_errors: bool,
    pub help_message: Option<String>,
    pub only: Vec<String>,
}

impl RunArgs {
    /// Flags given on the command line take precedence over the config file
    pub fn log_options(&self, from_config: &LogOptions) -> LogOptions {
        LogOptions {
            list_errors: self.list_errors || from_config.list_errors,
            help_message: self
                .help_message
                .clone()
                .or_else(|| from_config.help_message.clone()),
        }
    }

    /// Command line that reruns this invocation, used to prefix report lines
    pub fn command_path(&self) -> String {
        if self.config == Path::new(DEFAULT_CONFIG_FILE) {
            RUN_COMMAND_PATH.to_string()
        } else {
            format!("{RUN_COMMAND_PATH} -c {}", self.config.display())
        }
    }
}

/// Invokes `commands` concurrently and reports their results to `sink`
pub async fn run_and_report(
    context: &ExecutionContext,
    commands: &[Arc<dyn SubCommand>],
    options: &LogOptions,
    sink: &dyn LogSink,
) -> Result<Vec<CommandResult>> {
    let results = invoke_all(context, commands).await?;
    log_results(context.command_path(), &results, options, sink)?;
    Ok(results)
}

/// Returns `Ok(true)` when every command succeeded
pub async fn run_run_command(args: RunArgs) -> Result<bool> {
    let loader = ConfigLoader::new(&args.config);
    let config = loader
        .load()
        .await
        .with_context(|| format!("Failed to load {}", loader.path().display()))?;

    let commands = config.handles(&args.only)?;
    let options = args.log_options(&config.report);
    let working_dir = std::env::current_dir()?;
    let context = ExecutionContext::new(args.command_path(), working_dir);

    tracing::debug!("Running {} commands from {}", commands.len(), config.name);
    let results = run_and_report(&context, &commands, &options, &TracingSink).await?;
    Ok(!results.iter().any(CommandResult::is_failure))
}
