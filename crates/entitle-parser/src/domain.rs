//! Domain paths - the namespace prefix of an entitlement.

use serde::{Deserialize, Serialize};

use crate::error::LexicalError;
use crate::lexical::DomainLabel;

/// An ordered, non-empty sequence of domain labels, outermost first.
///
/// Duplicate labels are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<DomainLabel>", into = "Vec<DomainLabel>")]
pub struct DomainPath(Vec<DomainLabel>);

impl DomainPath {
    /// Create a domain path from already-validated labels.
    ///
    /// # Errors
    ///
    /// Returns [`LexicalError::EmptyDomain`] if `labels` is empty.
    pub fn new(labels: Vec<DomainLabel>) -> Result<Self, LexicalError> {
        if labels.is_empty() {
            return Err(LexicalError::EmptyDomain);
        }
        Ok(Self(labels))
    }

    /// Create a domain path by validating each raw label in turn.
    ///
    /// # Errors
    ///
    /// Returns the first label validation failure, or
    /// [`LexicalError::EmptyDomain`] if `labels` is empty.
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Result<Self, LexicalError> {
        let labels = labels
            .iter()
            .map(|l| DomainLabel::new(l.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(labels)
    }

    /// The labels in order.
    #[must_use]
    pub fn labels(&self) -> &[DomainLabel] {
        &self.0
    }

    /// Number of labels (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a path holds at least one label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The outermost label.
    #[must_use]
    pub fn first(&self) -> Option<&DomainLabel> {
        self.0.first()
    }

    /// The innermost label.
    #[must_use]
    pub fn last(&self) -> Option<&DomainLabel> {
        self.0.last()
    }

    /// Iterate over the labels, outermost first.
    pub fn iter(&self) -> std::slice::Iter<'_, DomainLabel> {
        self.0.iter()
    }

    /// Returns `true` if the labels equal `expected` element-wise.
    #[must_use]
    pub fn matches(&self, expected: &[&str]) -> bool {
        self.0.len() == expected.len()
            && self.0.iter().zip(expected).all(|(l, e)| l.as_str() == *e)
    }

    /// Consume the path, returning its labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<DomainLabel> {
        self.0
    }
}

impl TryFrom<Vec<DomainLabel>> for DomainPath {
    type Error = LexicalError;

    fn try_from(labels: Vec<DomainLabel>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<DomainPath> for Vec<DomainLabel> {
    fn from(path: DomainPath) -> Self {
        path.0
    }
}

impl<'a> IntoIterator for &'a DomainPath {
    type Item = &'a DomainLabel;
    type IntoIter = std::slice::Iter<'a, DomainLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for DomainPath {
    type Item = DomainLabel;
    type IntoIter = std::vec::IntoIter<DomainLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
