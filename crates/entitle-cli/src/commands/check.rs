//! `entitle check` - run the lexical predicates on raw text.

use anyhow::Result;
use entitle_parser::{is_valid_domain_label, is_valid_domain_path, is_valid_identifier};
use serde::Serialize;

use crate::formatter::{OutputFormat, Render, render};
use crate::theme::Theme;

/// What to check.
#[derive(Debug, Clone)]
pub(crate) enum Target {
    Label(String),
    Identifier(String),
    Path(Vec<String>),
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckReport {
    target: &'static str,
    input: Vec<String>,
    valid: bool,
}

impl CheckReport {
    pub(crate) fn new(target: &Target) -> Self {
        let (name, input, valid) = match target {
            Target::Label(text) => ("label", vec![text.clone()], is_valid_domain_label(text)),
            Target::Identifier(text) => {
                ("identifier", vec![text.clone()], is_valid_identifier(text))
            },
            Target::Path(labels) => {
                ("path", labels.clone(), is_valid_domain_path(labels.as_slice()))
            },
        };
        Self {
            target: name,
            input,
            valid,
        }
    }
}

impl Render for CheckReport {
    fn render_pretty(&self, out: &mut String) {
        let shown = format!("{} {:?}", self.target, self.input);
        if self.valid {
            out.push_str(&Theme::accepted(&format!("{shown} is valid")));
        } else {
            out.push_str(&Theme::rejected(&format!("{shown} is invalid")));
        }
        out.push('\n');
    }
}

/// Print the check result. Returns whether the text was valid.
pub(crate) fn run_check(target: &Target, format: OutputFormat) -> Result<bool> {
    let report = CheckReport::new(target);
    tracing::debug!(check = report.target, valid = report.valid, "lexical check");
    print!("{}", render(&report, format)?);
    Ok(report.valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_label() {
        assert!(CheckReport::new(&Target::Label("ex-ample".to_owned())).valid);
        assert!(!CheckReport::new(&Target::Label("ex--ample".to_owned())).valid);
    }

    #[test]
    fn test_check_identifier() {
        assert!(CheckReport::new(&Target::Identifier("do-it".to_owned())).valid);
        assert!(!CheckReport::new(&Target::Identifier("read=1".to_owned())).valid);
    }

    #[test]
    fn test_check_path() {
        let ok = Target::Path(vec!["com".to_owned(), "example".to_owned()]);
        assert!(CheckReport::new(&ok).valid);
        assert!(!CheckReport::new(&Target::Path(Vec::new())).valid);
        assert!(!CheckReport::new(&Target::Path(vec!["com".to_owned(), String::new()])).valid);
    }

    #[test]
    fn test_check_json() {
        let report = CheckReport::new(&Target::Label("-x".to_owned()));
        assert_eq!(
            render(&report, OutputFormat::Json).unwrap(),
            "{\"target\":\"label\",\"input\":[\"-x\"],\"valid\":false}\n"
        );
    }
}
