use desk_config::DeskConfig;
use figment::Jail;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("HELPDESK_STORAGE__DATA_DIR", "/srv/helpdesk");
        jail.set_env("HELPDESK_DATABASE__PATH", ":memory:");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, "/srv/helpdesk");
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".helpdesk")?;
        jail.create_file(
            ".helpdesk/config.toml",
            r#"
[storage]
seed_demo_data = true
"#,
        )?;
        jail.set_env("HELPDESK_STORAGE__SEED_DEMO_DATA", "false");

        let config = DeskConfig::load().expect("config loads");
        assert!(!config.storage.seed_demo_data);
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded_before_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "HELPDESK_GENERAL__DEFAULT_LIMIT=7\n")?;

        let env_path = jail.directory().join(".env");
        let config = DeskConfig::load_with_dotenv_from(&env_path).expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}
