//! Entitle CLI - validate and inspect entitlement declarations.
//!
//! Parses entitlement strings given on the command line or stdin and
//! reports either the structured result or the stage at which each input
//! was rejected.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use entitle_config::Config;
use entitle_parser::EntitlementKind;
use entitle_telemetry::LogConfig;

mod commands;
mod formatter;
mod theme;

use commands::{check, config, parse};
use formatter::OutputFormat;

/// Entitle - entitlement declaration parser
#[derive(Parser)]
#[command(name = "entitle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides `output.format` from config)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to an additional configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse entitlements from arguments, or from stdin when none are given
    Parse {
        /// Parse mode: void, int or str (defaults to `parser.default_kind`)
        #[arg(short, long)]
        kind: Option<EntitlementKind>,

        /// Entitlements to parse
        entitlements: Vec<String>,
    },

    /// Check individual lexical pieces
    Check {
        #[command(subcommand)]
        command: CheckCommands,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum CheckCommands {
    /// Check a single domain label
    Label {
        /// Text to check
        text: String,
    },
    /// Check an identifier
    Id {
        /// Text to check
        text: String,
    },
    /// Check a domain path given as separate labels
    Path {
        /// Labels, outermost first
        labels: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration and the files it came from
    Show,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let resolved = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let cfg = &resolved.config;

    // Set up logging from config, with --verbose override.
    let mut log_config = LogConfig::from_section(&cfg.logging)?;
    if cli.verbose {
        "debug".clone_into(&mut log_config.level);
    }
    if let Err(e) = entitle_telemetry::setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }
    tracing::debug!(files = ?resolved.loaded_files, "configuration loaded");

    if !cfg.output.color {
        colored::control::set_override(false);
    }

    let output_format = match cli.format {
        Some(format) => format,
        None => cfg.output.format.parse()?,
    };

    let success = match cli.command {
        Commands::Parse { kind, entitlements } => {
            let kind = match kind {
                Some(kind) => kind,
                None => cfg
                    .parser
                    .default_kind
                    .parse()
                    .map_err(anyhow::Error::msg)
                    .context("invalid parser.default_kind")?,
            };
            parse::run_parse(kind, entitlements, output_format)?
        },
        Commands::Check { command } => {
            let target = match command {
                CheckCommands::Label { text } => check::Target::Label(text),
                CheckCommands::Id { text } => check::Target::Identifier(text),
                CheckCommands::Path { labels } => check::Target::Path(labels),
            };
            check::run_check(&target, output_format)?
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => config::run_show(&resolved, output_format)?,
        },
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli =
            Cli::try_parse_from(["entitle", "parse", "--kind", "int", "quota.bytes=1"]).unwrap();
        match cli.command {
            Commands::Parse { kind, entitlements } => {
                assert_eq!(kind, Some(EntitlementKind::Int));
                assert_eq!(entitlements, vec!["quota.bytes=1"]);
            },
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["entitle", "parse", "--kind", "bool", "a.b"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "entitle", "check", "label", "com", "--format", "json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
