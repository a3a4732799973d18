
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let result = ConfigValidator::validate(&Config::default()).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].path, "server.port");
    }

    #[test]
    fn test_privileged_port_warns() {
        let mut config = Config::default();
        config.server.port = 80;
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, "server.port");
    }

    #[test]
    fn test_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "server.host"));
    }

    #[test]
    fn test_hostname_rejected() {
        let mut config = Config::default();
        config.server.host = "localhost".to_string();
        let result = ConfigValidator::validate(&config).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message.contains("localhost"));
    }

    #[test]
    fn test_ipv6_host_accepted() {
        let mut config = Config::default();
        config.server.host = "::1".to_string();
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_empty_seed_path() {
        let mut config = Config::default();
        config.store.seed_path = PathBuf::new();
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "store.seed_path"));
    }

    #[test]
    fn test_non_json_seed_path_warns() {
        let mut config = Config::default();
        config.store.seed_path = PathBuf::from("jobs.txt");
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "store.seed_path"));
    }

    #[test]
    fn test_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.errors.iter().any(|e| e.path == "logging.level"));
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        let result = ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_into_result_first_error() {
        let mut config = Config::default();
        config.server.port = 0;
        config.server.host = String::new();
        let err = ConfigValidator::validate(&config)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_into_result_returns_warnings() {
        let mut config = Config::default();
        config.server.port = 443;
        let warnings = ConfigValidator::validate(&config)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(warnings.len(), 1);
    }
