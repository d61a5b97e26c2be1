use anyhow::Result;
use std::path::PathBuf;

/// Name the agent application is registered under.
pub const APP_NAME: &str = "disasterscout";

/// Compiled entry point of the agent server, relative to the working directory.
pub const SERVER_ENTRY: &str = "dist/index.js";

/// Configuration for the launcher
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the agent package
    pub workdir: PathBuf,
}

impl Config {
    /// Load configuration from the current directory
    pub fn load() -> Result<Self> {
        Ok(Self {
            workdir: std::env::current_dir()?,
        })
    }

    /// Configuration rooted at an explicit directory
    pub fn at(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Dependency directory whose presence suppresses the install step
    pub fn node_modules(&self) -> PathBuf {
        self.workdir.join("node_modules")
    }

    /// Absolute path of the agent server entry point
    pub fn server_entry(&self) -> PathBuf {
        self.workdir.join(SERVER_ENTRY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = Config::at("/srv/agent");
        assert_eq!(config.node_modules(), PathBuf::from("/srv/agent/node_modules"));
        assert_eq!(config.server_entry(), PathBuf::from("/srv/agent/dist/index.js"));
    }

    #[test]
    fn test_load_uses_current_dir() {
        let config = Config::load().unwrap();
        assert!(config.workdir.is_absolute());
    }
}
