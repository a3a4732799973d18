
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.store.seed_path, PathBuf::from("jobs.json"));
        assert!(config.store.seed_required);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file_dir.is_none());
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8000

            [store]
            seed_required = false
        "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.store.seed_path, PathBuf::from("jobs.json"));
        assert!(!config.store.seed_required);
    }

    #[test]
    fn test_logging_file_dir() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "debug"
            file_dir = "/var/log/jobboard"
        "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.file_dir,
            Some(PathBuf::from("/var/log/jobboard"))
        );
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = Config::default();
        let content = toml::to_string(&config).unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("seed_path"));
    }
