use anyhow::Context;
use desk_config::DeskConfig;
use desk_core::access::{ensure_can_manage_groups, ensure_can_manage_users};
use desk_core::entities::User;
use desk_store::{AuthStore, DeskStore, FileStorage, OpenOptions};

use crate::bootstrap;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DeskConfig,
    pub store: DeskStore<FileStorage>,
    pub auth: AuthStore<FileStorage>,
}

impl AppContext {
    /// Open the entity store and the sign-in state under the configured data directory.
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let dir = bootstrap::data_dir(&config)?;
        let storage = FileStorage::open(&dir)
            .with_context(|| format!("failed to open storage at {}", dir.display()))?;

        let store = DeskStore::open_with(
            storage.clone(),
            OpenOptions {
                seed_demo_data: config.storage.seed_demo_data,
            },
        )?;
        let auth = AuthStore::open(storage)?;

        Ok(Self {
            config,
            store,
            auth,
        })
    }

    /// The signed-in user, or an error telling the caller to sign in.
    pub fn require_user(&self) -> anyhow::Result<&User> {
        self.auth
            .current()
            .ok_or_else(|| anyhow::anyhow!("not signed in; run `desk login <ROLE>` first"))
    }

    pub fn require_user_manager(&self) -> anyhow::Result<&User> {
        Ok(ensure_can_manage_users(self.auth.current())?)
    }

    pub fn require_group_manager(&self) -> anyhow::Result<&User> {
        Ok(ensure_can_manage_groups(self.auth.current())?)
    }
}
