use treehole::config::Config;
use treehole::constants::{DEFAULT_API_BASE_URL, DEFAULT_TITLE};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.page_size, 20);
    assert_eq!(config.display.default_title, DEFAULT_TITLE);
    assert!(config.display.set_terminal_title);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.api.page_size = 0;
    assert!(config.validate().is_err());
    config.api.page_size = 101;
    assert!(config.validate().is_err());
    config.api.page_size = 100;
    assert!(config.validate().is_ok());

    config.api.base_url = "not a url".to_string();
    assert!(config.validate().is_err());
    config.api.base_url = DEFAULT_API_BASE_URL.to_string();

    config.display.default_title = "  ".to_string();
    assert!(config.validate().is_err());
    config.display.default_title = DEFAULT_TITLE.to_string();

    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_level_filter() {
    let mut config = Config::default();
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Info);
    config.logging.level = "off".to_string();
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Off);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("[api]"));
    assert!(toml_str.contains("page_size = 20"));
    assert!(toml_str.contains("set_terminal_title = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
base_url = "https://treehole.example.com/api/v1"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.api.base_url, "https://treehole.example.com/api/v1");
    assert!(config.logging.enabled);

    assert_eq!(config.api.page_size, 20);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.display.default_title, DEFAULT_TITLE);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("treehole.toml");
    std::fs::write(&path, "[api]\npage_size = 50\n\n[display]\nset_terminal_title = false\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.api.page_size, 50);
    assert!(!config.display.set_terminal_title);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("treehole.toml");
    std::fs::write(&path, "[api]\npage_size = 500\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("page_size"), "{}", err);
}

#[test]
fn test_load_from_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"), "{}", err);
}

#[test]
fn test_generate_default_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Treehole Configuration File"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.page_size, 20);
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("treehole/config.toml"));
    }
}

#[test]
fn test_env_override_applies_to_explicit_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[api]\nbase_url = \"http://file.example.com/api/v1\"\npage_size = 30\n").unwrap();

    std::env::set_var("TREEHOLE_API_URL", "http://env.example.com/api/v1");
    let loaded = Config::load_from(Some(&path));
    std::env::remove_var("TREEHOLE_API_URL");

    let config = loaded.unwrap();
    assert_eq!(config.api.base_url, "http://env.example.com/api/v1");
    assert_eq!(config.api.page_size, 30);
}
