//! Subprocess abstraction used by shell-backed sub-commands
//!
//! Commands never spawn processes directly; they go through a
//! [`ProcessRunner`] carried by the execution context so tests can swap in
//! [`MockProcessRunner`].

pub mod error;
pub mod mock;
pub mod runner;

pub use error::ProcessError;
pub use mock::{MockCommandConfig, MockProcessRunner};
pub use runner::{ExitStatus, ProcessCommand, ProcessOutput, ProcessRunner, TokioProcessRunner};
