//! `entitle parse` - run a parse mode over each input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use entitle_parser::{DomainLabel, Entitlement, EntitlementKind, ParseStage, parse_as};
use serde::Serialize;

use crate::formatter::{OutputFormat, Render, render};
use crate::theme::Theme;

/// Outcome of parsing one input.
#[derive(Debug, Serialize)]
pub(crate) struct ParseReport {
    input: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    entitlement: Option<Entitlement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<ParseStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ParseReport {
    pub(crate) fn new(kind: EntitlementKind, input: String) -> Self {
        match parse_as(kind, &input) {
            Ok(entitlement) => {
                tracing::debug!(%kind, input = %input, "parsed entitlement");
                Self {
                    input,
                    ok: true,
                    entitlement: Some(entitlement),
                    stage: None,
                    error: None,
                }
            },
            Err(e) => {
                tracing::debug!(%kind, input = %input, stage = %e.stage(), "rejected entitlement");
                Self {
                    input,
                    ok: false,
                    entitlement: None,
                    stage: Some(e.stage()),
                    error: Some(e.to_string()),
                }
            },
        }
    }
}

impl Render for ParseReport {
    fn render_pretty(&self, out: &mut String) {
        let Some(entitlement) = &self.entitlement else {
            let message = self.error.as_deref().unwrap_or("parse failed");
            out.push_str(&Theme::rejected(message));
            out.push('\n');
            return;
        };

        out.push_str(&Theme::accepted(&self.input));
        out.push('\n');

        let labels: Vec<&str> = entitlement.domain().iter().map(DomainLabel::as_str).collect();
        let mut details = vec![
            ("kind", entitlement.kind().to_string()),
            ("domain", format!("[{}]", labels.join(", "))),
            ("id", entitlement.id().to_string()),
        ];
        if let Some(value) = entitlement.int_value() {
            details.push(("value", value.to_string()));
        }
        if let Some(value) = entitlement.str_value() {
            details.push(("value", format!("{value:?}")));
        }

        for (key, value) in details {
            out.push_str(&Theme::field(key, &value));
            out.push('\n');
        }
    }
}

/// Parse every input with `kind`, printing one report per input.
///
/// Reads non-empty stdin lines when `inputs` is empty. Returns `false` if any
/// input was rejected.
pub(crate) fn run_parse(
    kind: EntitlementKind,
    inputs: Vec<String>,
    format: OutputFormat,
) -> Result<bool> {
    let inputs = if inputs.is_empty() {
        read_stdin_lines()?
    } else {
        inputs
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_ok = true;

    for input in inputs {
        let report = ParseReport::new(kind, input);
        all_ok &= report.ok;
        out.write_all(render(&report, format)?.as_bytes())
            .context("failed to write output")?;
    }

    Ok(all_ok)
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        // `lines` drops the terminator only; content is passed verbatim.
        let line = line.context("failed to read stdin")?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
