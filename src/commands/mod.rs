//! Sub-command handles and the context they are invoked against
//!
//! A sub-command is anything implementing [`SubCommand`]. The built-in
//! [`ShellCommand`] runs a single program; hosts can implement the trait for
//! in-process work as well.

use async_trait::async_trait;

pub mod context;
pub mod result;
pub mod shell;

pub use context::{ExecutionContext, InvocationContext};
pub use result::{CommandError, CommandRef, CommandResult, StepStatus};
pub use shell::ShellCommand;

/// An invocable unit representing one sub-command.
#[async_trait]
pub trait SubCommand: Send + Sync {
    /// Human-readable name shown in summaries
    fn name(&self) -> &str;

    /// Runs the command against the shared context.
    ///
    /// An `Err` means the command could not be invoked at all and aborts the
    /// whole round; a command that ran and failed returns
    /// `Ok(CommandResult)` with [`StepStatus::Failure`].
    async fn execute(&self, context: &ExecutionContext) -> Result<CommandResult, CommandError>;
}
