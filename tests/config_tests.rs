use float_vector::{Accumulation, MetricConfig, VectorError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_config() {
    let config = MetricConfig::default();
    assert_eq!(config.accumulation, Accumulation::Single);
    assert_eq!(MetricConfig::from_json("{}").unwrap(), config);
}

#[test]
fn test_config_from_json() {
    let config = MetricConfig::from_json(r#"{"accumulation": "double"}"#).unwrap();
    assert_eq!(config.accumulation, Accumulation::Double);
}

#[test]
fn test_config_rejects_unknown_fields() {
    let err = MetricConfig::from_json(r#"{"accumulation": "single", "simd": true}"#).unwrap_err();
    assert!(matches!(err, VectorError::ConfigError(_)));

    let err = MetricConfig::from_json(r#"{"accumulation": "quad"}"#).unwrap_err();
    assert!(matches!(err, VectorError::ConfigError(_)));
}

#[test]
fn test_config_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"accumulation": "double"}}"#).unwrap();

    let config = MetricConfig::load(file.path()).unwrap();
    assert_eq!(config.accumulation, Accumulation::Double);
}

#[test]
fn test_config_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = MetricConfig::load(temp_dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, VectorError::Other(_)));
    assert!(err.to_string().contains("missing.json"));
}
