//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use desk_config::{ConfigError, DeskConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
data_dir = "/var/lib/helpdesk"
seed_demo_data = false
"#,
        )?;

        let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.data_dir, "/var/lib/helpdesk");
        assert!(!config.storage.seed_demo_data);
        assert_eq!(config.database.path, "helpdesk.db");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".helpdesk")?;
        jail.create_file(
            ".helpdesk/config.toml",
            r#"
[database]
path = "tickets.db"

[general]
recent_tickets = 10
"#,
        )?;

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.database.path, "tickets.db");
        assert_eq!(config.general.recent_tickets, 10);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn zero_limit_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".helpdesk")?;
        jail.create_file(
            ".helpdesk/config.toml",
            r#"
[general]
default_limit = 0
"#,
        )?;

        let err = DeskConfig::load().expect_err("zero limit should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.default_limit"));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".helpdesk")?;
        jail.create_file(
            ".helpdesk/config.toml",
            r#"
[storage]
seed_demo_data = "sometimes"
"#,
        )?;

        let err = DeskConfig::load().expect_err("bad bool should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
