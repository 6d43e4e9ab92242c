//! Integration tests for sentiview-config crate.

use sentiview_common::{LoggingConfig, SentiViewError};
use sentiview_config::{Config, ConfigError, ConfigLoader, ConfigValidator, Engine};
use std::io::Write;

#[test]
fn test_default_config_validation() {
    let config = Config::default();
    assert!(ConfigValidator::validate(&config).is_ok());
    assert_eq!(config.analysis.engine, Engine::Lexicon);
    assert_eq!(config.charts.pie_file, "pie_chart.png");
    assert_eq!(config.charts.bar_file, "bar_chart.png");
}

#[test]
fn test_load_config_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "analysis:\n  engine: polarity\ncharts:\n  static_dir: out").unwrap();

    let config = ConfigLoader::load(Some(file.path())).expect("config should load");
    assert_eq!(config.analysis.engine, Engine::Polarity);
    assert_eq!(config.charts.static_dir.to_str(), Some("out"));
}

#[test]
fn test_validation_error_converts_to_common_error() {
    let err = ConfigError::ValidationError {
        field: "server.bind_address".to_string(),
        message: "must not be empty".to_string(),
    };
    let common: SentiViewError = err.into();
    assert!(matches!(
        common,
        SentiViewError::Validation { field: Some(ref f), .. } if f == "server.bind_address"
    ));
}

#[test]
fn test_logging_section_maps_to_logging_config() {
    let mut config = Config::default();
    config.logging.level = "sentiview_web=debug".to_string();
    config.logging.json_format = true;

    let logging = LoggingConfig::from(&config.logging);
    assert_eq!(logging.level, "sentiview_web=debug");
    assert!(logging.json_format);
    assert!(logging.file_path.is_none());
}

#[test]
fn test_engine_round_trips_through_display() {
    for engine in [Engine::Lexicon, Engine::Polarity] {
        assert_eq!(engine.to_string().parse::<Engine>(), Ok(engine));
    }
}
