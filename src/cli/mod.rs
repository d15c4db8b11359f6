//! CLI command handlers
//!
//! - Argument parsing structures
//! - Command implementations
//! - Routing from parsed arguments to implementations

pub mod args;
pub mod commands;
pub mod router;

pub use args::{Cli, Commands};
pub use router::{execute_command, get_log_level};
