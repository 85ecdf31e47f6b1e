//! Post-merge configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Validate a fully-merged and deserialized configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_parser(config)?;
    validate_output(config)?;
    validate_logging(config)?;
    Ok(())
}

fn one_of(field: &str, value: &str, allowed: &[&str], what: &str) -> ConfigResult<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        field: field.to_owned(),
        message: format!(
            "unsupported {what} '{value}'; expected one of: {}",
            allowed.join(", ")
        ),
    })
}

fn validate_parser(config: &Config) -> ConfigResult<()> {
    // Canonical lowercase names only. `--kind` on the command line also
    // takes `integer`/`string` in any case; config files do not.
    one_of(
        "parser.default_kind",
        &config.parser.default_kind,
        &["void", "int", "str"],
        "entitlement kind",
    )
}

fn validate_output(config: &Config) -> ConfigResult<()> {
    one_of(
        "output.format",
        &config.output.format,
        &["pretty", "json"],
        "output format",
    )
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    one_of(
        "logging.level",
        &config.logging.level,
        &["trace", "debug", "info", "warn", "error"],
        "log level",
    )?;
    one_of(
        "logging.format",
        &config.logging.format,
        &["pretty", "compact", "json", "full"],
        "log format",
    )?;

    if let Some(empty) = config.logging.directives.iter().position(|d| d.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: format!("logging.directives[{empty}]"),
            message: "directive must not be empty".to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_default_kind() {
        let mut config = Config::default();
        config.parser.default_kind = "bool".to_owned();

        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == "parser.default_kind"
        ));
        assert_eq!(
            err.to_string(),
            "invalid config value for parser.default_kind: unsupported entitlement kind 'bool'; \
             expected one of: void, int, str"
        );
    }

    #[test]
    fn test_default_kind_aliases_rejected() {
        for kind in ["integer", "string", "Int", "VOID"] {
            let mut config = Config::default();
            config.parser.default_kind = kind.to_owned();
            assert!(validate(&config).is_err(), "{kind}");
        }
    }

    #[test]
    fn test_invalid_output_format() {
        let mut config = Config::default();
        config.output.format = "yaml".to_owned();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "output.format"
        ));
    }

    #[test]
    fn test_invalid_logging() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_owned();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.logging.format = "xml".to_owned();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.logging.directives = vec!["entitle_cli=debug".to_owned(), " ".to_owned()];
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "logging.directives[1]"
        ));
    }
}
