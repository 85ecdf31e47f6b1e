#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Layered configuration for the entitle toolchain.
//!
//! # Usage
//!
//! ```rust,no_run
//! use entitle_config::Config;
//!
//! // Load with full precedence chain (defaults → user → explicit file → env).
//! let resolved = Config::load(None).unwrap();
//! println!("default parse mode: {}", resolved.config.parser.default_kind);
//! ```
//!
//! # Configuration Precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Environment variables** (`ENTITLE_LOG_LEVEL`, `ENTITLE_LOG_FORMAT`,
//!    `ENTITLE_OUTPUT_FORMAT`, `ENTITLE_DEFAULT_KIND`)
//! 2. **Explicit file** (passed with `--config`)
//! 3. **User** (`~/.entitle/config.toml`, or `$ENTITLE_HOME/config.toml`)
//! 4. **Embedded defaults** (`defaults.toml` compiled into binary)
//!
//! This crate has no dependencies on other internal entitle crates.

/// Environment variable overrides.
pub mod env;
/// Configuration error types.
pub mod error;
/// Configuration file discovery and loading.
pub mod loader;
/// Recursive TOML merging.
pub mod merge;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::ResolvedConfig;
pub use types::*;

impl Config {
    /// Load configuration with full precedence chain.
    ///
    /// See [`loader::load`] for the full algorithm.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any config file is malformed or the final
    /// configuration fails validation.
    pub fn load(explicit: Option<&std::path::Path>) -> ConfigResult<ResolvedConfig> {
        loader::load(explicit, None)
    }

    /// Load configuration with an explicit home directory override.
    ///
    /// `home` is treated as the `.entitle` directory itself.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any config file is malformed or the final
    /// configuration fails validation.
    pub fn load_with_home(
        explicit: Option<&std::path::Path>,
        home: &std::path::Path,
    ) -> ConfigResult<ResolvedConfig> {
        loader::load(explicit, Some(home))
    }
}
