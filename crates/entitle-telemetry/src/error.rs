//! Telemetry error types.

use thiserror::Error;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The level or a directive is not valid filter syntax.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected level or directive
        filter: String,
        /// Parser message from `tracing-subscriber`
        reason: String,
    },

    /// A log format name is not recognised.
    #[error("unknown log format '{0}'; expected one of: pretty, compact, json, full")]
    UnknownFormat(String),

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    InitError(String),

    /// The log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    LogDirectory {
        /// Directory that could not be created
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
