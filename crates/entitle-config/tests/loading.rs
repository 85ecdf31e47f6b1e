//! Layered loading against real files in temporary directories.

use std::collections::HashMap;
use std::path::Path;

use entitle_config::loader::{load_file, load_with_env};
use entitle_config::{Config, ConfigError};

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

fn no_env() -> HashMap<String, String> {
    HashMap::new()
}

#[test]
fn test_defaults_only() {
    let home = tempfile::tempdir().unwrap();

    let resolved = load_with_env(None, Some(home.path()), &no_env()).unwrap();
    assert_eq!(resolved.config, Config::default());
    assert!(resolved.loaded_files.is_empty());
}

#[test]
fn test_user_then_explicit_precedence() {
    let home = tempfile::tempdir().unwrap();
    write(
        &home.path().join("config.toml"),
        "[parser]\ndefault_kind = \"int\"\n[output]\nformat = \"json\"\n",
    );

    let work = tempfile::tempdir().unwrap();
    let explicit = work.path().join("entitle.toml");
    write(&explicit, "[parser]\ndefault_kind = \"str\"\n");

    let resolved = load_with_env(Some(&explicit), Some(home.path()), &no_env()).unwrap();
    assert_eq!(resolved.config.parser.default_kind, "str");
    assert_eq!(resolved.config.output.format, "json");
    assert!(resolved.config.output.color);
    assert_eq!(resolved.loaded_files.len(), 2);
}

#[test]
fn test_env_overrides_files() {
    let home = tempfile::tempdir().unwrap();
    write(&home.path().join("config.toml"), "[logging]\nlevel = \"info\"\n");

    let env = HashMap::from([
        ("ENTITLE_LOG_LEVEL".to_owned(), "trace".to_owned()),
        ("ENTITLE_DEFAULT_KIND".to_owned(), "int".to_owned()),
    ]);

    let resolved = load_with_env(None, Some(home.path()), &env).unwrap();
    assert_eq!(resolved.config.logging.level, "trace");
    assert_eq!(resolved.config.parser.default_kind, "int");
}

#[test]
fn test_invalid_env_value_fails_validation() {
    let home = tempfile::tempdir().unwrap();
    let env = HashMap::from([("ENTITLE_OUTPUT_FORMAT".to_owned(), "yaml".to_owned())]);

    let err = load_with_env(None, Some(home.path()), &env).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationError { ref field, .. } if field == "output.format"
    ));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope.toml");

    let err = load_with_env(Some(&missing), Some(home.path()), &no_env()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_malformed_file() {
    let home = tempfile::tempdir().unwrap();
    write(&home.path().join("config.toml"), "[parser\n");

    let err = load_with_env(None, Some(home.path()), &no_env()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let home = tempfile::tempdir().unwrap();
    write(&home.path().join("config.toml"), "[output]\ncolor = \"yes\"\n");

    let err = load_with_env(None, Some(home.path()), &no_env()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ParseError { ref path, .. } if path == "<merged config>"
    ));
}

#[test]
fn test_oversized_file_rejected() {
    let home = tempfile::tempdir().unwrap();
    let padding = "#".repeat(1_048_577);
    write(&home.path().join("config.toml"), &padding);

    let err = load_with_env(None, Some(home.path()), &no_env()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_load_file_standalone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    write(&path, "[logging]\nformat = \"json\"\n");

    let config = load_file(&path).unwrap();
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_resolved_config_renders_toml() {
    let home = tempfile::tempdir().unwrap();
    let resolved = load_with_env(None, Some(home.path()), &no_env()).unwrap();

    let rendered = resolved.to_toml().unwrap();
    assert!(rendered.contains("default_kind = \"void\""));

    let reparsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(reparsed, resolved.config);
}
