//! Entitle Parser - Structured parsing of entitlement declarations.
//!
//! An entitlement names a capability inside a hierarchical, dot-separated
//! namespace and optionally carries a typed argument:
//!
//! - `com.example.read` - a valueless (void) entitlement
//! - `quota.bytes=1048576` - an integer-valued entitlement
//! - `net.host=example.org` - a string-valued entitlement
//!
//! This crate provides:
//! - Lexical validators for domain labels and identifiers
//! - Validated token types ([`DomainLabel`], [`Identifier`], [`DomainPath`])
//! - Three parse modes sharing a single decomposer
//! - A closed error taxonomy that names the failing parse stage
//!
//! # Grammar
//!
//! ```text
//! entitlement_void = domain_path "." identifier
//! entitlement_int  = domain_path "." identifier "=" int_value
//! entitlement_str  = domain_path "." identifier "=" str_value
//!
//! domain_path = label ("." label)*
//! label       = alnum ("-"? alnum)*
//! identifier  = label
//! ```
//!
//! For valued entitlements the input is split on its first `=` before the
//! namespace is split on `.`, so string values may contain dots.
//!
//! # Example
//!
//! ```
//! use entitle_parser::{Entitlement, EntitlementError, parse_int, parse_str, parse_void};
//!
//! let read = parse_void("com.example.read").unwrap();
//! assert!(read.domain().matches(&["com", "example"]));
//! assert_eq!(read.id().as_str(), "read");
//!
//! let quota = parse_int("quota.bytes=1048576").unwrap();
//! assert_eq!(quota.int_value(), Some(1_048_576));
//!
//! let host = parse_str("net.host=example.org").unwrap();
//! assert_eq!(host.str_value(), Some("example.org"));
//!
//! assert!(matches!(
//!     parse_void("read"),
//!     Err(EntitlementError::MissingDomainOrId { .. })
//! ));
//! # let _: Entitlement = read;
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod decompose;
mod domain;
mod entitlement;
mod error;
mod lexical;
mod parse;

pub use domain::DomainPath;
pub use entitlement::{Entitlement, EntitlementKind};
pub use error::{EntitlementError, EntitlementResult, LexicalError, ParseStage};
pub use lexical::{
    DomainLabel, Identifier, is_valid_domain_label, is_valid_domain_path, is_valid_identifier,
};
pub use parse::{parse_as, parse_int, parse_str, parse_void};
