//! # fanout
//!
//! Runs a set of sub-commands concurrently against one shared context and
//! summarizes their outcomes.
//!
//! ## Usage
//!
//! ```bash
//! fanout run [-c fanout.toml] [--list-errors] [--help-message "text"] [--only NAME]
//! ```
//!
//! ## Modules
//!
//! - `commands` - Sub-command handles, results and the invocation context
//! - `invoker` - Concurrent fan-out with launch-order results
//! - `report` - Summary and failure-detail rendering
//! - `config` - TOML run configuration
//! - `subprocess` - Process runner abstraction for testing
//! - `cli` - Argument parsing and command routing for the binary
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod invoker;
pub mod report;
pub mod subprocess;

pub use commands::{CommandResult, ExecutionContext, InvocationContext, StepStatus, SubCommand};
pub use error::{Error, Result};
pub use invoker::invoke_all;
pub use report::{log_results, LogOptions, LogSink};
