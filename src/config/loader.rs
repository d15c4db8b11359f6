use super::RunConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads and validates a [`RunConfig`] from a TOML file
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<RunConfig> {
        tracing::debug!("Loading config from {}", self.path.display());
        let content = fs::read_to_string(&self.path).await?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<RunConfig> {
        let config: RunConfig = toml::from_str(content)?;
        config.validate()?;
        tracing::trace!("Loaded {} commands", config.commands.len());
        Ok(config)
    }
}
