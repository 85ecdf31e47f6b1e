//! Terminal styling for command reports.

use colored::Colorize;

/// Styles shared by every pretty report.
pub(crate) struct Theme;

impl Theme {
    /// Section title, e.g. in `config show`.
    pub(crate) fn section(title: &str) -> String {
        title.bold().cyan().to_string()
    }

    /// Input that passed.
    pub(crate) fn accepted(text: &str) -> String {
        format!("{} {text}", "✓".green().bold())
    }

    /// Input that was rejected, with the reason.
    pub(crate) fn rejected(reason: &str) -> String {
        format!("{} {}", "✗".red().bold(), reason.red())
    }

    /// Indented `key: value` line under an accepted input.
    pub(crate) fn field(key: &str, value: &str) -> String {
        format!("    {} {value}", format!("{key}:").dimmed())
    }

    /// Secondary text.
    pub(crate) fn note(text: &str) -> String {
        text.dimmed().to_string()
    }
}
