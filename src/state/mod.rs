//! State persistence module
//!
//! Remembers the last confirmed directory between runs.
//! Stores state in JSON format (.mdlite-config.json).

mod types;

pub use types::PersistedConfig;

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the state file, relative to the working directory
pub const STATE_FILE_NAME: &str = ".mdlite-config.json";

/// Environment variable that overrides the state file location
pub const STATE_FILE_ENV: &str = "MDLITE_CONFIG";

/// Resolve where the state file lives for a run started in `cwd`
pub fn default_path(cwd: &Path) -> PathBuf {
    match std::env::var_os(STATE_FILE_ENV) {
        Some(path) if !path.is_empty() => cwd.join(path),
        _ => cwd.join(STATE_FILE_NAME),
    }
}

/// JSON-backed store for [`PersistedConfig`]
///
/// Every call goes to disk. Nothing is cached between calls, so two
/// concurrent runs simply overwrite each other.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state file, falling back to an empty config on any failure
    pub fn read(&self) -> PersistedConfig {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No usable state at {}: {}", self.path.display(), e);
                return PersistedConfig::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            debug!("Ignoring malformed state at {}: {}", self.path.display(), e);
            PersistedConfig::default()
        })
    }

    /// Overwrite the state file with `config`
    pub fn write(&self, config: &PersistedConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn last_dir(&self) -> Option<PathBuf> {
        self.read().last_dir
    }

    pub fn set_last_dir(&self, dir: &Path) -> Result<()> {
        let mut config = self.read();
        config.last_dir = Some(dir.to_path_buf());
        self.write(&config)?;
        debug!("Remembered {} in {}", dir.display(), self.path.display());
        Ok(())
    }
}
