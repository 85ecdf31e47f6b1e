//! The parsed entitlement value object.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainPath;
use crate::lexical::Identifier;

/// Which grammar variant an entitlement follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementKind {
    /// `domain.identifier`
    Void,
    /// `domain.identifier=<i64>`
    Int,
    /// `domain.identifier=<string>`
    Str,
}

impl EntitlementKind {
    /// Whether this variant carries an `=value` argument.
    #[must_use]
    pub fn is_valued(self) -> bool {
        !matches!(self, Self::Void)
    }
}

impl std::fmt::Display for EntitlementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Int => write!(f, "int"),
            Self::Str => write!(f, "str"),
        }
    }
}

impl FromStr for EntitlementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "void" => Ok(Self::Void),
            "int" | "integer" => Ok(Self::Int),
            "str" | "string" => Ok(Self::Str),
            _ => Err(format!(
                "unknown entitlement kind '{s}'; expected one of: void, int, str"
            )),
        }
    }
}

/// A parsed entitlement.
///
/// Values are immutable once returned by a parse mode. Every label of
/// `domain` and the `id` satisfy the label language, and `domain` holds at
/// least one label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entitlement {
    /// A capability with no argument.
    Void {
        /// Namespace, outermost first
        domain: DomainPath,
        /// Capability name
        id: Identifier,
    },
    /// A capability with a signed 64-bit integer argument.
    Int {
        /// Namespace, outermost first
        domain: DomainPath,
        /// Capability name
        id: Identifier,
        /// Argument
        value: i64,
    },
    /// A capability with a verbatim string argument.
    Str {
        /// Namespace, outermost first
        domain: DomainPath,
        /// Capability name
        id: Identifier,
        /// Argument, exactly as it appeared after the first `=`
        value: String,
    },
}

impl Entitlement {
    /// The grammar variant of this entitlement.
    #[must_use]
    pub fn kind(&self) -> EntitlementKind {
        match self {
            Self::Void { .. } => EntitlementKind::Void,
            Self::Int { .. } => EntitlementKind::Int,
            Self::Str { .. } => EntitlementKind::Str,
        }
    }

    /// The namespace of this entitlement.
    #[must_use]
    pub fn domain(&self) -> &DomainPath {
        match self {
            Self::Void { domain, .. } | Self::Int { domain, .. } | Self::Str { domain, .. } => {
                domain
            },
        }
    }

    /// The capability name.
    #[must_use]
    pub fn id(&self) -> &Identifier {
        match self {
            Self::Void { id, .. } | Self::Int { id, .. } | Self::Str { id, .. } => id,
        }
    }

    /// The integer argument, if this is an [`Entitlement::Int`].
    #[must_use]
    pub fn int_value(&self) -> Option<i64> {
        match self {
            Self::Int { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// The string argument, if this is an [`Entitlement::Str`].
    #[must_use]
    pub fn str_value(&self) -> Option<&str> {
        match self {
            Self::Str { value, .. } => Some(value),
            _ => None,
        }
    }
}
