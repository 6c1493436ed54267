use income_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.period_labels.label(52), "Week");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, Config::default());
}

#[test]
fn config_manager_persists_labels_and_period() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.locale = "es-US".to_string();
    cfg.default_period = 52;
    cfg.period_labels.set(52, "Semana").expect("set label");

    manager.save(&cfg).expect("save config");
    assert!(!dir.path().join("config.json.tmp").exists());
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.locale, "es-US");
    assert_eq!(loaded.default_period, 52);
    assert_eq!(loaded.period_labels.label(52), "Semana");
}

#[test]
fn corrupt_file_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().expect_err("should fail");
    assert!(matches!(err, income_config::ConfigError::Serde(_)));
}
