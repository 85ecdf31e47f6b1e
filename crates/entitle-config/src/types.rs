//! Configuration types for the entitle toolchain.
//!
//! Every struct implements [`Default`] with the same values as the embedded
//! `defaults.toml`, so a bare `[section]` header produces a working
//! configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser defaults.
    pub parser: ParserSection,
    /// Result rendering.
    pub output: OutputSection,
    /// Logging level, format, and per-crate directives.
    pub logging: LoggingSection,
}

/// Parser defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    /// Parse mode used when none is given: `"void"`, `"int"` or `"str"`.
    pub default_kind: String,
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            default_kind: "void".to_owned(),
        }
    }
}

/// How parse results are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// `"pretty"` or `"json"`.
    pub format: String,
    /// Whether pretty output uses ANSI colors.
    pub color: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "pretty".to_owned(),
            color: true,
        }
    }
}

/// Logging and tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"` (human-friendly), `"compact"` (one-line),
    /// `"json"` (structured), or `"full"` (verbose).
    pub format: String,
    /// Per-crate tracing directives (e.g. `["entitle_cli=debug"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: "compact".to_owned(),
            directives: Vec::new(),
        }
    }
}
