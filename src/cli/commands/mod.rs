//! Implementations of the individual CLI commands

pub mod list;
pub mod run;

pub use list::run_list_command;
pub use run::{run_and_report, run_run_command, RunArgs};
