//! # Template Validation
//!
//! Runs both checks (key reconciliation and value-type reconciliation) and
//! bundles their outcomes in a [`ValidationReport`].
//!
//! Validation reports problems instead of failing: callers inspect the
//! report and get the full diagnostic in one pass. Callers that want a
//! `Result` can use [`ValidationReport::into_result`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tmpl_core::{Document, Template};

use crate::keys::{reconcile_keys, KeyReconciliation};
use crate::types::{reconcile_types, TypeCheck};

/// Combined outcome of matching one document against one template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Flattened key-set comparison.
    pub keys: KeyReconciliation,
    /// Positional leaf type comparison.
    pub types: TypeCheck,
}

impl ValidationReport {
    /// True when the key sets match and every leaf has its expected type.
    pub fn is_valid(&self) -> bool {
        self.keys.is_match() && self.types.is_conformant()
    }

    /// Every problem as a human-readable line, key problems first.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.keys.is_match() {
            out.push(self.keys.to_string());
        }
        out.extend(self.types.messages());
        out
    }

    /// `Ok(())` when valid, otherwise the report wrapped in an error.
    pub fn into_result(self) -> Result<(), TemplateMismatch> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(TemplateMismatch { report: self })
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "keys: {}", self.keys)?;
        write!(f, "types: {}", self.types)
    }
}

/// A document did not match its template.
#[derive(Error, Debug)]
#[error("document does not match template:\n{}", .report.problems().join("\n"))]
pub struct TemplateMismatch {
    /// The full report that failed.
    pub report: ValidationReport,
}

/// Match `document` against `template`.
pub fn validate(document: &Document, template: &Template) -> ValidationReport {
    let keys = reconcile_keys(document, template);
    let types = reconcile_types(document, template);
    let report = ValidationReport { keys, types };

    tracing::debug!(
        missing = report.keys.missing.len(),
        extra = report.keys.extra.len(),
        type_mismatches = report.types.mismatches().len(),
        valid = report.is_valid(),
        "template match complete"
    );

    report
}

/// A template held for validating many documents.
///
/// The matcher never mutates its template, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct TemplateMatcher {
    template: Template,
}

impl TemplateMatcher {
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Key reconciliation only.
    pub fn match_keys(&self, document: &Document) -> KeyReconciliation {
        reconcile_keys(document, &self.template)
    }

    /// Value-type reconciliation only.
    pub fn match_value_types(&self, document: &Document) -> TypeCheck {
        reconcile_types(document, &self.template)
    }

    /// Both checks.
    pub fn validate(&self, document: &Document) -> ValidationReport {
        validate(document, &self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmpl_core::TypeTag;

    fn template() -> Template {
        Template::new()
            .with_leaf("a", TypeTag::Integer)
            .with_branch("b", Template::new().with_leaf("c", TypeTag::Text))
    }

    #[test]
    fn test_valid_document() {
        let doc = Document::new()
            .with_leaf("a", 1)
            .with_branch("b", Document::new().with_leaf("c", "x"));
        let report = validate(&doc, &template());
        assert!(report.is_valid());
        assert!(report.problems().is_empty());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_missing_key_and_leaf_count() {
        let doc = Document::new()
            .with_leaf("a", 1)
            .with_branch("b", Document::new());
        let report = validate(&doc, &template());
        assert!(!report.is_valid());
        assert_eq!(
            report.problems(),
            vec![
                "Missing Keys = c".to_string(),
                crate::types::LEAF_COUNT_MISMATCH_MESSAGE.to_string(),
            ]
        );
    }

    #[test]
    fn test_into_result_carries_report() {
        let doc = Document::new()
            .with_leaf("a", "one")
            .with_branch("b", Document::new().with_leaf("c", "x"));
        let err = validate(&doc, &template()).into_result().unwrap_err();
        assert_eq!(err.report.types.mismatches().len(), 1);
        let msg = err.to_string();
        assert!(msg.contains("expected int, got str"), "got: {msg}");
    }

    #[test]
    fn test_matcher_reuses_template() {
        let matcher = TemplateMatcher::new(template());
        let good = matcher.template().skeleton();
        let bad = Document::new().with_leaf("a", 1);

        assert!(matcher.validate(&good).is_valid());
        assert!(matcher.match_keys(&good).is_match());
        assert!(matcher.match_value_types(&good).is_conformant());

        assert!(!matcher.validate(&bad).is_valid());
        assert_eq!(matcher.match_keys(&bad).missing.len(), 2);
    }

    #[test]
    fn test_matcher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateMatcher>();
    }

    #[test]
    fn test_report_display() {
        let doc = Document::new()
            .with_leaf("a", 1)
            .with_branch("b", Document::new().with_leaf("c", "x"));
        let shown = validate(&doc, &template()).to_string();
        assert_eq!(
            shown,
            "keys: No missing or extra keys\ntypes: All values match their expected types"
        );
    }
}
