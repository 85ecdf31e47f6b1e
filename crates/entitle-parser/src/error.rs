//! Error types for entitlement parsing.

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entitlement::EntitlementKind;

/// The parse stage at which an entitlement was rejected.
///
/// Stages run in declaration order; the first failing stage determines the
/// reported error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStage {
    /// Splitting the input into at least two dot-separated components.
    Components,
    /// Validating every label of the domain path.
    Domain,
    /// Checking the `identifier=value` shape of the final component.
    Trailer,
    /// Validating the identifier.
    Identifier,
    /// Interpreting the argument value.
    Value,
}

impl std::fmt::Display for ParseStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Components => write!(f, "components"),
            Self::Domain => write!(f, "domain"),
            Self::Trailer => write!(f, "trailer"),
            Self::Identifier => write!(f, "identifier"),
            Self::Value => write!(f, "value"),
        }
    }
}

/// Errors produced by the entitlement parse modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntitlementError {
    /// The input did not split into at least two dot-separated components.
    #[error("parsing of {kind} entitlement '{input}' failed: either domain or id missing")]
    MissingDomainOrId {
        /// The parse mode in use
        kind: EntitlementKind,
        /// The verbatim input
        input: String,
    },

    /// A domain label failed lexical validation.
    #[error(
        "parsing of {kind} entitlement '{input}' failed: domain label {index} ('{label}') must be \
         alphanumeric and can contain '-'. '.' is a domain separator"
    )]
    InvalidDomain {
        /// The parse mode in use
        kind: EntitlementKind,
        /// The verbatim input
        input: String,
        /// Zero-based position of the offending label
        index: usize,
        /// The offending label
        label: String,
    },

    /// The final component is not of the form `identifier=value`.
    #[error(
        "parsing of {kind} entitlement '{input}' failed: trailer '{trailer}' does not match \
         'identifier=value'"
    )]
    MalformedTrailer {
        /// The parse mode in use
        kind: EntitlementKind,
        /// The verbatim input
        input: String,
        /// The final component, including any value
        trailer: String,
    },

    /// The identifier failed lexical validation.
    #[error(
        "parsing of {kind} entitlement '{input}' failed: identifier '{identifier}' must be \
         alphanumeric and can contain '-'"
    )]
    InvalidIdentifier {
        /// The parse mode in use
        kind: EntitlementKind,
        /// The verbatim input
        input: String,
        /// The offending identifier
        identifier: String,
    },

    /// The argument of an integer entitlement is not a signed 64-bit decimal.
    #[error(
        "parsing of int entitlement '{input}' failed: argument '{value}' must be a 64-bit \
         signed integer"
    )]
    InvalidIntegerValue {
        /// The verbatim input
        input: String,
        /// The raw argument text
        value: String,
        /// The underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
}

impl EntitlementError {
    /// The input text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::MissingDomainOrId { input, .. }
            | Self::InvalidDomain { input, .. }
            | Self::MalformedTrailer { input, .. }
            | Self::InvalidIdentifier { input, .. }
            | Self::InvalidIntegerValue { input, .. } => input,
        }
    }

    /// The parse mode that produced this error.
    #[must_use]
    pub fn kind(&self) -> EntitlementKind {
        match self {
            Self::MissingDomainOrId { kind, .. }
            | Self::InvalidDomain { kind, .. }
            | Self::MalformedTrailer { kind, .. }
            | Self::InvalidIdentifier { kind, .. } => *kind,
            Self::InvalidIntegerValue { .. } => EntitlementKind::Int,
        }
    }

    /// The parse stage that rejected the input.
    #[must_use]
    pub fn stage(&self) -> ParseStage {
        match self {
            Self::MissingDomainOrId { .. } => ParseStage::Components,
            Self::InvalidDomain { .. } => ParseStage::Domain,
            Self::MalformedTrailer { .. } => ParseStage::Trailer,
            Self::InvalidIdentifier { .. } => ParseStage::Identifier,
            Self::InvalidIntegerValue { .. } => ParseStage::Value,
        }
    }
}

/// Result type for entitlement parsing.
pub type EntitlementResult<T> = Result<T, EntitlementError>;

/// Errors produced when constructing lexical tokens directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// The text is not a valid domain label.
    #[error("invalid domain label '{text}': must be alphanumeric and can contain '-'")]
    InvalidLabel {
        /// The rejected text
        text: String,
    },

    /// The text is not a valid identifier.
    #[error("invalid identifier '{text}': must be alphanumeric and can contain '-'")]
    InvalidIdentifier {
        /// The rejected text
        text: String,
    },

    /// A domain path was built from zero labels.
    #[error("domain path must contain at least one label")]
    EmptyDomain,
}
