//! Lexical validation for domain labels and identifiers.
//!
//! Labels and identifiers share one regular language: ASCII alphanumeric
//! runs joined by single hyphens, never starting or ending with a hyphen.

use std::borrow::Borrow;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LexicalError;

/// Alphanumeric runs separated by single dashes.
static ALNUM_OR_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("invalid regex")
});

fn is_alnum_or_dash(text: &str) -> bool {
    ALNUM_OR_DASH.is_match(text)
}

/// Returns `true` if `text` is a well-formed domain label.
#[must_use]
pub fn is_valid_domain_label(text: &str) -> bool {
    is_alnum_or_dash(text)
}

/// Returns `true` if `labels` is non-empty and every element is a valid
/// domain label.
#[must_use]
pub fn is_valid_domain_path<S: AsRef<str>>(labels: &[S]) -> bool {
    !labels.is_empty() && labels.iter().all(|l| is_valid_domain_label(l.as_ref()))
}

/// Returns `true` if `text` is a well-formed identifier.
#[must_use]
pub fn is_valid_identifier(text: &str) -> bool {
    is_alnum_or_dash(text)
}

/// One validated component of a domain path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainLabel(String);

impl DomainLabel {
    /// Create a label, validating it against the label language.
    ///
    /// # Errors
    ///
    /// Returns [`LexicalError::InvalidLabel`] if `text` is not a valid label.
    pub fn new(text: impl Into<String>) -> Result<Self, LexicalError> {
        let text = text.into();
        if is_valid_domain_label(&text) {
            Ok(Self(text))
        } else {
            Err(LexicalError::InvalidLabel { text })
        }
    }

    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the label, returning its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainLabel {
    type Err = LexicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DomainLabel {
    type Error = LexicalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DomainLabel {
    type Error = LexicalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DomainLabel> for String {
    fn from(label: DomainLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for DomainLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DomainLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The validated name of an entitlement within its domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier, validating it against the identifier language.
    ///
    /// # Errors
    ///
    /// Returns [`LexicalError::InvalidIdentifier`] if `text` is not a valid
    /// identifier.
    pub fn new(text: impl Into<String>) -> Result<Self, LexicalError> {
        let text = text.into();
        if is_valid_identifier(&text) {
            Ok(Self(text))
        } else {
            Err(LexicalError::InvalidIdentifier { text })
        }
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = LexicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = LexicalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = LexicalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}
