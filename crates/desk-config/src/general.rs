//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Number of tickets shown in the dashboard's recent list.
const fn default_recent_tickets() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// How many of the newest tickets the dashboard shows.
    #[serde(default = "default_recent_tickets")]
    pub recent_tickets: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            recent_tickets: default_recent_tickets(),
        }
    }
}
