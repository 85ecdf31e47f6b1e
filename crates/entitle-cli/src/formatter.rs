//! Output formatters for rendering command results in the terminal.

use std::str::FromStr;

use anyhow::{Result, bail};
use serde::Serialize;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Pretty,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => bail!("unsupported output format '{other}'; expected one of: pretty, json"),
        }
    }
}

/// A command result that can be shown either styled or as JSON.
pub(crate) trait Render: Serialize {
    /// Append the human-readable form to `out`, one or more full lines.
    fn render_pretty(&self, out: &mut String);
}

/// Render `report` in the requested format. JSON output is a single line.
pub(crate) fn render<R: Render>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => {
            let mut out = String::new();
            report.render_pretty(&mut out);
            Ok(out)
        },
        OutputFormat::Json => {
            let mut line = serde_json::to_string(report)?;
            line.push('\n');
            Ok(line)
        },
    }
}
