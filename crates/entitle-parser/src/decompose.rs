//! Structural decomposition shared by all parse modes.
//!
//! Stages run in a fixed order so that every mode classifies the same
//! malformed input identically:
//!
//! 1. component count (at least two dot-separated components)
//! 2. domain labels
//! 3. trailer shape (`identifier=value` for valued kinds)
//! 4. identifier
//!
//! Value interpretation is left to the caller.

use crate::domain::DomainPath;
use crate::entitlement::EntitlementKind;
use crate::error::{EntitlementError, EntitlementResult};
use crate::lexical::{DomainLabel, Identifier};

/// An entitlement split into validated structure and a raw argument.
#[derive(Debug)]
pub(crate) struct Decomposed<'a> {
    pub(crate) domain: DomainPath,
    pub(crate) id: Identifier,
    /// Text after the first `=`; always `Some` for valued kinds.
    pub(crate) value: Option<&'a str>,
}

/// Split `input` according to the grammar of `kind`.
///
/// For valued kinds the input is cut at its first `=` before the namespace
/// is split on `.`, so the argument may itself contain dots.
pub(crate) fn decompose(kind: EntitlementKind, input: &str) -> EntitlementResult<Decomposed<'_>> {
    let (path, value) = if kind.is_valued() {
        match input.split_once('=') {
            Some((path, value)) => (path, Some(value)),
            None => (input, None),
        }
    } else {
        (input, None)
    };

    let Some((domain_text, id_text)) = path.rsplit_once('.') else {
        return Err(EntitlementError::MissingDomainOrId {
            kind,
            input: input.to_owned(),
        });
    };

    let domain = decompose_domain(kind, input, domain_text)?;

    if kind.is_valued() && !is_well_formed_argument(kind, value) {
        let trailer = match value {
            Some(v) => format!("{id_text}={v}"),
            None => id_text.to_owned(),
        };
        return Err(EntitlementError::MalformedTrailer {
            kind,
            input: input.to_owned(),
            trailer,
        });
    }

    let id = Identifier::new(id_text).map_err(|_| EntitlementError::InvalidIdentifier {
        kind,
        input: input.to_owned(),
        identifier: id_text.to_owned(),
    })?;

    Ok(Decomposed { domain, id, value })
}

fn decompose_domain(
    kind: EntitlementKind,
    input: &str,
    domain_text: &str,
) -> EntitlementResult<DomainPath> {
    let labels = domain_text
        .split('.')
        .enumerate()
        .map(|(index, label)| {
            DomainLabel::new(label).map_err(|_| EntitlementError::InvalidDomain {
                kind,
                input: input.to_owned(),
                index,
                label: label.to_owned(),
            })
        })
        .collect::<EntitlementResult<Vec<_>>>()?;

    // `split` always yields at least one item, so the path is never empty.
    DomainPath::new(labels).map_err(|_| EntitlementError::MissingDomainOrId {
        kind,
        input: input.to_owned(),
    })
}

/// Integer arguments never contain `=`; a second one is a shape error
/// rather than a number error.
fn is_well_formed_argument(kind: EntitlementKind, value: Option<&str>) -> bool {
    match (kind, value) {
        (_, None) => false,
        (EntitlementKind::Int, Some(v)) => !v.contains('='),
        (_, Some(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseStage;

    fn stage(kind: EntitlementKind, input: &str) -> ParseStage {
        decompose(kind, input).unwrap_err().stage()
    }

    #[test]
    fn test_void_uses_last_component_as_identifier() {
        let d = decompose(EntitlementKind::Void, "a.b.c").unwrap();
        assert!(d.domain.matches(&["a", "b"]));
        assert_eq!(d.id.as_str(), "c");
        assert_eq!(d.value, None);
    }

    #[test]
    fn test_valued_splits_on_first_equals() {
        let d = decompose(EntitlementKind::Str, "net.host=a.b=c").unwrap();
        assert!(d.domain.matches(&["net"]));
        assert_eq!(d.id.as_str(), "host");
        assert_eq!(d.value, Some("a.b=c"));
    }

    #[test]
    fn test_stage_order() {
        // Fewer than two components wins over everything else.
        assert_eq!(stage(EntitlementKind::Int, "-bad=x=y"), ParseStage::Components);
        // Domain is checked before the trailer shape.
        assert_eq!(stage(EntitlementKind::Int, "a..b"), ParseStage::Domain);
        // Trailer shape is checked before the identifier.
        assert_eq!(stage(EntitlementKind::Str, "a.-b"), ParseStage::Trailer);
        assert_eq!(stage(EntitlementKind::Str, "a.-b="), ParseStage::Identifier);
    }

    #[test]
    fn test_invalid_domain_reports_position() {
        let err = decompose(EntitlementKind::Void, "ok.also-ok.bad-.id").unwrap_err();
        assert_eq!(
            err,
            EntitlementError::InvalidDomain {
                kind: EntitlementKind::Void,
                input: "ok.also-ok.bad-.id".to_string(),
                index: 2,
                label: "bad-".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_trailer_text() {
        let err = decompose(EntitlementKind::Int, "quota.bytes=1=2").unwrap_err();
        assert_eq!(
            err,
            EntitlementError::MalformedTrailer {
                kind: EntitlementKind::Int,
                input: "quota.bytes=1=2".to_string(),
                trailer: "bytes=1=2".to_string(),
            }
        );

        let err = decompose(EntitlementKind::Str, "svc.tag").unwrap_err();
        assert!(matches!(
            err,
            EntitlementError::MalformedTrailer { ref trailer, .. } if trailer == "tag"
        ));
    }
}
