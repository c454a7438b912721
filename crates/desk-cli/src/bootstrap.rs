use std::path::PathBuf;

use anyhow::Context;
use desk_config::DeskConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DeskConfig> {
    let mut config = DeskConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(dir);
    }
    Ok(config)
}

/// Directory for the local collection blobs.
pub fn data_dir(config: &DeskConfig) -> anyhow::Result<PathBuf> {
    config
        .storage
        .resolved_data_dir()
        .context("failed to resolve storage directory")
}

/// Path handed to libSQL for the relational store.
pub fn database_path(config: &DeskConfig) -> anyhow::Result<String> {
    if config.database.is_in_memory() {
        return Ok(config.database.path.clone());
    }
    let dir = data_dir(config)?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;
    Ok(config.database.resolved_path(&dir))
}

#[cfg(test)]
mod tests {
    use desk_config::DeskConfig;
    use pretty_assertions::assert_eq;

    use super::database_path;

    #[test]
    fn relative_database_lands_in_data_dir() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let mut config = DeskConfig::default();
        config.storage.data_dir = tmp.path().to_string_lossy().into_owned();
        config.database.path = "desk.db".into();

        let path = database_path(&config).expect("path");
        assert_eq!(path, tmp.path().join("desk.db").to_string_lossy());
    }

    #[test]
    fn in_memory_database_is_untouched() {
        let mut config = DeskConfig::default();
        config.database.path = ":memory:".into();
        assert_eq!(database_path(&config).expect("path"), ":memory:");
    }
}
