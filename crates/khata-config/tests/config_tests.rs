use khata_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(!cfg.categories.is_empty());
}

#[test]
fn load_returns_defaults_when_no_file_exists() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = manager.load().expect("load config");
    assert_eq!(cfg.currency, Config::default().currency);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");

    let mut cfg = Config::default();
    cfg.currency = "USD".to_string();
    cfg.locale = "en-US".to_string();
    cfg.add_category("Subscriptions");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.locale, "en-US");
    assert!(loaded.categories.iter().any(|c| c == "Subscriptions"));
}

#[test]
fn corrupt_config_surfaces_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    std::fs::write(manager.config_path(), "not json").expect("write garbage");

    assert!(manager.load().is_err());
}
