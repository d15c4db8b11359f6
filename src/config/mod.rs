//! Run configuration: which commands to fan out and how to report them

use crate::commands::{ShellCommand, SubCommand};
use crate::error::{Error, Result};
use crate::report::LogOptions;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

pub mod loader;

pub use loader::ConfigLoader;

pub const DEFAULT_CONFIG_FILE: &str = "fanout.toml";
pub const DEFAULT_NAME: &str = "fanout";

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Label for this set of commands
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub report: LogOptions,

    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl CommandConfig {
    pub fn to_command(&self) -> ShellCommand {
        let mut command =
            ShellCommand::new(&self.name, &self.program).with_args(self.args.iter().cloned());
        command.env = self.env.clone();
        command.timeout = self.timeout;
        command
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.commands.is_empty() {
            return Err(Error::Config("no commands configured".to_string()));
        }

        let mut seen = HashSet::new();
        for command in &self.commands {
            if command.name.trim().is_empty() {
                return Err(Error::Config(format!(
                    "command running '{}' has an empty name",
                    command.program
                )));
            }
            if !seen.insert(command.name.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate command name '{}'",
                    command.name
                )));
            }
        }
        Ok(())
    }

    /// Commands named in `only`, in config order; all commands when empty
    pub fn select(&self, only: &[String]) -> Result<Vec<&CommandConfig>> {
        if only.is_empty() {
            return Ok(self.commands.iter().collect());
        }

        if let Some(unknown) = only
            .iter()
            .find(|name| !self.commands.iter().any(|c| &c.name == *name))
        {
            return Err(Error::Config(format!("unknown command '{unknown}'")));
        }

        Ok(self
            .commands
            .iter()
            .filter(|c| only.contains(&c.name))
            .collect())
    }

    /// Invocable handles for the selected commands
    pub fn handles(&self, only: &[String]) -> Result<Vec<Arc<dyn SubCommand>>> {
        Ok(self
            .select(only)?
            .into_iter()
            .map(|c| Arc::new(c.to_command()) as Arc<dyn SubCommand>)
            .collect())
    }
}
