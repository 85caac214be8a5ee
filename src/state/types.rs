use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Persisted state remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedConfig {
    /// Directory confirmed in the most recent run
    #[serde(rename = "lastDir", default, skip_serializing_if = "Option::is_none")]
    pub last_dir: Option<PathBuf>,

    /// Keys written by someone else, carried through a read-modify-write
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
impl PersistedConfig {
    pub fn with_last_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            last_dir: Some(dir.into()),
            ..Self::default()
        }
    }
}
