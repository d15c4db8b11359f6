//! Command routing and execution

use crate::cli::args::Commands;
use crate::cli::commands::{run_list_command, run_run_command, RunArgs};
use anyhow::Result;

/// Log filter for the given `-v` count
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,tower=debug", // -vvv shows everything including dependencies
    }
}

/// Executes a parsed command; `Ok(false)` means at least one sub-command failed
pub async fn execute_command(command: Commands) -> Result<bool> {
    match command {
        Commands::Run {
            config,
            list_errors,
            help_message,
            only,
        } => {
            run_run_command(RunArgs {
                config,
                list_errors,
                help_message,
                only,
            })
            .await
        }
        Commands::List { config } => {
            run_list_command(config).await?;
            Ok(true)
        }
    }
}
