mod common;

use currency_format::{
    storage::JsonCatalog, ConfigManager, CurrencyFormatter, FormatOptions, FormatterConfig,
    Selector,
};
use tempfile::tempdir;

use common::catalog;

#[test]
fn default_config_uses_usd_without_catalog() {
    let cfg = FormatterConfig::default();

    assert_eq!(cfg.default_currency, "USD");
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());

    assert_eq!(manager.load().expect("load"), FormatterConfig::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("nested").join("config.json"));

    let cfg = FormatterConfig {
        default_currency: "GBP".into(),
        catalog_path: Some(dir.path().join("currencies.json")),
    };
    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());
    std::fs::write(manager.path(), "{}").unwrap();

    assert_eq!(manager.load().unwrap().default_currency, "USD");
}

#[test]
fn formatter_from_config_uses_catalog_and_default() {
    let dir = tempdir().expect("tempdir");
    let catalog_path = dir.path().join("currencies.json");
    JsonCatalog::save(&catalog_path, catalog()).unwrap();

    let cfg = FormatterConfig {
        default_currency: "JPY".into(),
        catalog_path: Some(catalog_path),
    };
    let formatter = CurrencyFormatter::from_config(&cfg).expect("formatter");

    assert_eq!(formatter.default_currency(), "JPY");
    assert_eq!(formatter.format("2500.4", Selector::Default, FormatOptions::default()), "¥2,500");
    assert_eq!(formatter.format("2500.4", "5", FormatOptions::default()), "2,500.400 KD");
}

#[test]
fn formatter_from_config_without_catalog_degrades() {
    let formatter = CurrencyFormatter::from_config(&FormatterConfig::default()).unwrap();

    assert!(formatter.is_empty());
    assert_eq!(formatter.format("$7.50", Selector::Default, FormatOptions::default()), "7.5");
}
