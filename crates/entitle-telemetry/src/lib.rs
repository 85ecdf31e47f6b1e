//! Entitle Telemetry - Logging setup for the entitle toolchain.
//!
//! This crate provides:
//! - Configurable logging setup with multiple formats
//! - Stdout, stderr and daily-rolling file targets
//! - Conversion from the `[logging]` config section (feature `config`)
//!
//! # Example
//!
//! ```rust,no_run
//! use entitle_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), entitle_telemetry::TelemetryError> {
//! let config = LogConfig::new("debug")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("entitle_cli=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, LogTarget, setup_logging};
