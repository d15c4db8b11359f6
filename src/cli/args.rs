//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Run a set of commands concurrently and summarize the outcome
#[derive(Parser)]
#[command(name = "fanout")]
#[command(about = "fanout - Run commands concurrently and summarize their results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every configured command concurrently
    #[command(name = "run")]
    Run {
        /// Config file listing the commands
        #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Print the error output of failed commands
        #[arg(long)]
        list_errors: bool,

        /// Message printed after the summary
        #[arg(long, value_name = "MESSAGE")]
        help_message: Option<String>,

        /// Run only the named commands
        #[arg(long, value_name = "NAME")]
        only: Vec<String>,
    },

    /// List configured commands
    #[command(name = "list")]
    List {
        /// Config file listing the commands
        #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}
