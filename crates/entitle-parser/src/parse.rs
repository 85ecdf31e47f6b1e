//! Parse modes - one typed entry point per grammar variant.

use crate::decompose::{Decomposed, decompose};
use crate::entitlement::{Entitlement, EntitlementKind};
use crate::error::{EntitlementError, EntitlementResult};

/// Parse a valueless entitlement of the form `domain.identifier`.
///
/// Always returns [`Entitlement::Void`] on success.
///
/// # Errors
///
/// In detection order: [`EntitlementError::MissingDomainOrId`],
/// [`EntitlementError::InvalidDomain`], [`EntitlementError::InvalidIdentifier`].
/// An `=` in the final component is part of the identifier and therefore
/// rejected as an invalid identifier.
pub fn parse_void(input: &str) -> EntitlementResult<Entitlement> {
    let Decomposed { domain, id, .. } = decompose(EntitlementKind::Void, input)?;
    Ok(Entitlement::Void { domain, id })
}

/// Parse an integer entitlement of the form `domain.identifier=<i64>`.
///
/// The argument is a signed decimal with an optional `+` or `-` sign.
/// Leading zeros are accepted; whitespace, digit separators and radix
/// prefixes are not. Always returns [`Entitlement::Int`] on success.
///
/// # Errors
///
/// In detection order: [`EntitlementError::MissingDomainOrId`],
/// [`EntitlementError::InvalidDomain`], [`EntitlementError::MalformedTrailer`]
/// (no `=`, or more than one), [`EntitlementError::InvalidIdentifier`],
/// [`EntitlementError::InvalidIntegerValue`] (syntax error or overflow).
pub fn parse_int(input: &str) -> EntitlementResult<Entitlement> {
    let Decomposed { domain, id, value } = decompose(EntitlementKind::Int, input)?;
    let raw = value.unwrap_or_default();
    let value = raw
        .parse::<i64>()
        .map_err(|source| EntitlementError::InvalidIntegerValue {
            input: input.to_owned(),
            value: raw.to_owned(),
            source,
        })?;
    Ok(Entitlement::Int { domain, id, value })
}

/// Parse a string entitlement of the form `domain.identifier=<string>`.
///
/// The argument is everything after the first `=`, verbatim. It may be
/// empty and may contain `.` or further `=` characters. Always returns
/// [`Entitlement::Str`] on success.
///
/// # Errors
///
/// In detection order: [`EntitlementError::MissingDomainOrId`],
/// [`EntitlementError::InvalidDomain`], [`EntitlementError::MalformedTrailer`]
/// (no `=`), [`EntitlementError::InvalidIdentifier`].
pub fn parse_str(input: &str) -> EntitlementResult<Entitlement> {
    let Decomposed { domain, id, value } = decompose(EntitlementKind::Str, input)?;
    Ok(Entitlement::Str {
        domain,
        id,
        value: value.unwrap_or_default().to_owned(),
    })
}

/// Parse `input` with the mode selected by `kind`.
///
/// # Errors
///
/// Returns the same errors as the selected mode.
pub fn parse_as(kind: EntitlementKind, input: &str) -> EntitlementResult<Entitlement> {
    match kind {
        EntitlementKind::Void => parse_void(input),
        EntitlementKind::Int => parse_int(input),
        EntitlementKind::Str => parse_str(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_void() {
        let e = parse_void("com.example.read").unwrap();
        assert_eq!(e.kind(), EntitlementKind::Void);
        assert!(e.domain().matches(&["com", "example"]));
        assert_eq!(e.id().as_str(), "read");
    }

    #[test]
    fn test_parse_void_rejects_argument() {
        assert!(matches!(
            parse_void("quota.bytes=1"),
            Err(EntitlementError::InvalidIdentifier { ref identifier, .. }) if identifier == "bytes=1"
        ));
    }

    #[test]
    fn test_parse_int() {
        let e = parse_int("quota.bytes=1048576").unwrap();
        assert_eq!(e.int_value(), Some(1_048_576));

        assert_eq!(parse_int("quota.bytes=+7").unwrap().int_value(), Some(7));
        assert_eq!(parse_int("quota.bytes=007").unwrap().int_value(), Some(7));
        assert_eq!(parse_int("quota.bytes=-0").unwrap().int_value(), Some(0));
    }

    #[test]
    fn test_parse_int_rejects_non_decimal() {
        for bad in [
            "q.b=", "q.b=abc", "q.b=0x10", "q.b=1_000", "q.b= 1", "q.b=1 ", "q.b=-", "q.b=1.5",
        ] {
            let err = parse_int(bad).unwrap_err();
            assert!(
                matches!(err, EntitlementError::InvalidIntegerValue { .. }),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_int_error_carries_raw_value() {
        let err = parse_int("quota.bytes=abc").unwrap_err();
        assert!(matches!(
            err,
            EntitlementError::InvalidIntegerValue { ref value, .. } if value == "abc"
        ));
        assert_eq!(
            err.to_string(),
            "parsing of int entitlement 'quota.bytes=abc' failed: argument 'abc' must be a \
             64-bit signed integer"
        );
    }

    #[test]
    fn test_parse_str() {
        let e = parse_str("net.host=example.org").unwrap();
        assert!(e.domain().matches(&["net"]));
        assert_eq!(e.id().as_str(), "host");
        assert_eq!(e.str_value(), Some("example.org"));

        let e = parse_str("svc.tag= spaced = value ").unwrap();
        assert_eq!(e.str_value(), Some(" spaced = value "));
    }

    #[test]
    fn test_parse_as_dispatches() {
        assert_eq!(
            parse_as(EntitlementKind::Void, "a.b").unwrap(),
            parse_void("a.b").unwrap()
        );
        assert_eq!(
            parse_as(EntitlementKind::Int, "a.b=1").unwrap(),
            parse_int("a.b=1").unwrap()
        );
        assert_eq!(
            parse_as(EntitlementKind::Str, "a.b=1").unwrap(),
            parse_str("a.b=1").unwrap()
        );
    }

    #[test]
    fn test_error_names_mode() {
        assert_eq!(parse_str("x").unwrap_err().kind(), EntitlementKind::Str);
        assert_eq!(parse_int("x").unwrap_err().kind(), EntitlementKind::Int);
        assert_eq!(parse_void("x").unwrap_err().kind(), EntitlementKind::Void);
    }
}
