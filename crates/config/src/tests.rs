use crate::AppConfig;

#[test]
fn test_load_from_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file(
            "config/default.toml",
            r#"
                app_name = "catalog"
                app_env = "development"

                [server]
                host = "127.0.0.1"
                port = 50051

                [telemetry]
                log_level = "debug"
            "#,
        )?;

        let config = AppConfig::load("config").expect("config should load");
        assert_eq!(config.app_name, "catalog");
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 50051);
        assert_eq!(config.telemetry.log_level, "debug");
        Ok(())
    });
}

#[test]
fn test_log_level_defaults_to_info() {
    figment::Jail::expect_with(|jail| {
        jail.create_dir("config")?;
        jail.create_file(
            "config/default.toml",
            r#"
                app_name = "catalog"
                app_env = "production"

                [server]
                host = "0.0.0.0"
                port = 50051

                [telemetry]
            "#,
        )?;

        let config = AppConfig::load("config").expect("config should load");
        assert!(config.is_production());
        assert_eq!(config.telemetry.log_level, "info");
        Ok(())
    });
}
