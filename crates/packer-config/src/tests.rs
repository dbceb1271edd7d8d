//! Tests for packer configuration.

use std::io::Write;

use packer_core::{Item, Task};

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        thread_count = 2

        [limits]
        max_capacity = 200.0
        max_item_count = 10
        max_item_weight = 50.0
        max_item_cost = 75.5
    "#;

    let config = PackerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.thread_count, 2);
    assert_eq!(config.limits.max_capacity, 200.0);
    assert_eq!(config.limits.max_item_count, 10);
    assert_eq!(config.limits.max_item_weight, 50.0);
    assert_eq!(config.limits.max_item_cost, 75.5);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        thread_count: 6
        limits:
          max_item_count: 12
    "#;

    let config = PackerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.thread_count, 6);
    assert_eq!(config.limits.max_item_count, 12);
    assert_eq!(config.limits.max_capacity, 100.0);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = PackerConfig::from_toml_str("").unwrap();
    assert_eq!(config, PackerConfig::default());
    assert_eq!(config.thread_count, DEFAULT_THREAD_COUNT);
    assert_eq!(config.limits, LimitsConfig::default());
}

#[test]
fn test_invalid_toml() {
    let result = PackerConfig::from_toml_str("thread_count = \"many\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builder() {
    let config = PackerConfig::new()
        .with_thread_count(1)
        .with_limits(LimitsConfig {
            max_capacity: 10.0,
            ..LimitsConfig::default()
        });

    assert_eq!(config.thread_count, 1);
    assert_eq!(config.limits.max_capacity, 10.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_threads_rejected() {
    let config = PackerConfig::new().with_thread_count(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_negative_limit_rejected() {
    let config = PackerConfig::new().with_limits(LimitsConfig {
        max_item_cost: -1.0,
        ..LimitsConfig::default()
    });

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("max_item_cost"));
}

#[test]
fn test_rule_set_from_limits() {
    let config = PackerConfig::new().with_limits(LimitsConfig {
        max_capacity: 20.0,
        ..LimitsConfig::default()
    });
    let rules = config.rule_set();

    assert_eq!(rules.rules().len(), 4);
    assert!(rules.validate(&Task::new(20.0, vec![Item::new(1, 5.0, 5.0)])).is_ok());
    assert!(rules.validate(&Task::new(21.0, vec![Item::new(1, 5.0, 5.0)])).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "thread_count = 3").unwrap();

    let config = PackerConfig::load(file.path()).unwrap();
    assert_eq!(config.thread_count, 3);
}

#[test]
fn test_load_missing_file() {
    let result = PackerConfig::load("does/not/exist/packer.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "thread_count = 0").unwrap();

    assert!(matches!(
        PackerConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}
