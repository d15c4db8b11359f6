//! List command implementation

use crate::config::ConfigLoader;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Print the configured commands
pub async fn run_list_command(config: PathBuf) -> Result<()> {
    let loader = ConfigLoader::new(config);
    let config = loader
        .load()
        .await
        .with_context(|| format!("Failed to load {}", loader.path().display()))?;

    println!("Commands in {}:", config.name);
    for command in &config.commands {
        println!("  {} - {} {}", command.name, command.program, command.args.join(" "));
    }
    Ok(())
}
