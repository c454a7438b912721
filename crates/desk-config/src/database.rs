//! Relational store configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "helpdesk.db".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL database file, or `:memory:`. Relative paths resolve against
    /// the storage data directory.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// The path to hand to libSQL, with relative paths placed under `data_dir`.
    #[must_use]
    pub fn resolved_path(&self, data_dir: &Path) -> String {
        if self.is_in_memory() || Path::new(&self.path).is_absolute() {
            return self.path.clone();
        }
        data_dir.join(&self.path).to_string_lossy().into_owned()
    }
}
