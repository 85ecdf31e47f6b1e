//! `entitle config show` - print the resolved configuration.

use anyhow::Result;
use entitle_config::{Config, ResolvedConfig};
use serde::Serialize;

use crate::formatter::{OutputFormat, Render, render};
use crate::theme::Theme;

#[derive(Debug, Serialize)]
pub(crate) struct ConfigReport<'a> {
    loaded_files: &'a [String],
    config: &'a Config,
    #[serde(skip)]
    toml: String,
}

impl<'a> ConfigReport<'a> {
    pub(crate) fn new(resolved: &'a ResolvedConfig) -> Result<Self> {
        Ok(Self {
            loaded_files: &resolved.loaded_files,
            config: &resolved.config,
            toml: resolved.to_toml()?,
        })
    }
}

impl Render for ConfigReport<'_> {
    fn render_pretty(&self, out: &mut String) {
        out.push_str(&Theme::section("Loaded files"));
        out.push('\n');
        if self.loaded_files.is_empty() {
            out.push_str(&Theme::note("  (built-in defaults only)"));
            out.push('\n');
        }
        for file in self.loaded_files {
            out.push_str("  ");
            out.push_str(file);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&Theme::section("Resolved configuration"));
        out.push('\n');
        out.push_str(&self.toml);
        if !self.toml.ends_with('\n') {
            out.push('\n');
        }
    }
}

/// Print the resolved configuration. Always succeeds once rendered.
pub(crate) fn run_show(resolved: &ResolvedConfig, format: OutputFormat) -> Result<bool> {
    let report = ConfigReport::new(resolved)?;
    print!("{}", render(&report, format)?);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ResolvedConfig {
        ResolvedConfig {
            config: Config::default(),
            loaded_files: Vec::new(),
        }
    }

    #[test]
    fn test_pretty_lists_defaults() {
        let resolved = defaults();
        let report = ConfigReport::new(&resolved).unwrap();
        let text = render(&report, OutputFormat::Pretty).unwrap();

        assert!(text.contains("built-in defaults only"));
        assert!(text.contains("default_kind = \"void\""));
    }

    #[test]
    fn test_json_output() {
        let mut resolved = defaults();
        resolved.loaded_files.push("/tmp/entitle.toml".to_owned());

        let report = ConfigReport::new(&resolved).unwrap();
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["loaded_files"][0], "/tmp/entitle.toml");
        assert_eq!(value["config"]["output"]["format"], "pretty");
        assert!(value.get("toml").is_none());
    }
}
