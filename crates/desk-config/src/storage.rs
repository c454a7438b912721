//! Local entity store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one JSON blob per entity collection.
    ///
    /// Empty means the platform data directory (`~/.local/share/helpdesk` on Linux).
    #[serde(default)]
    pub data_dir: String,

    /// Seed absent collections with demo data on first load.
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            seed_demo_data: default_seed(),
        }
    }
}

impl StorageConfig {
    /// The directory collections are stored in.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` if `data_dir` is empty and the
    /// platform has no data directory.
    pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.data_dir.is_empty() {
            return Ok(PathBuf::from(&self.data_dir));
        }
        dirs::data_dir()
            .map(|dir| dir.join("helpdesk"))
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "storage.data_dir".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            data_dir: "/tmp/desk-data".into(),
            seed_demo_data: false,
        };
        assert_eq!(
            config.resolved_data_dir().unwrap(),
            PathBuf::from("/tmp/desk-data")
        );
    }

    #[test]
    fn seeding_is_on_by_default() {
        assert!(StorageConfig::default().seed_demo_data);
    }
}
