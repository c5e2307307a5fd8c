//! # Key Reconciliation
//!
//! Compares the flattened key sets of a document and a template.
//!
//! Keys from every depth are collected into one set per tree, so a key is
//! either present somewhere in a tree or not. A key that appears at the
//! wrong depth (for example `year` at the root instead of under `dob`) is
//! indistinguishable from one at the right depth. Path-qualified
//! structural comparison is out of scope for this check.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tmpl_core::{Mapping, Node};

/// Every key in `mapping`, depth-first.
///
/// Each key is emitted before the keys of the mapping it holds, if any.
/// Duplicates across levels are kept.
pub fn extract_keys<L>(mapping: &Mapping<L>) -> Vec<&str> {
    let mut keys = Vec::new();
    collect_keys(mapping, &mut keys);
    keys
}

fn collect_keys<'a, L>(mapping: &'a Mapping<L>, out: &mut Vec<&'a str>) {
    for (key, node) in mapping.iter() {
        out.push(key);
        if let Node::Branch(inner) = node {
            collect_keys(inner, out);
        }
    }
}

/// The flattened key set of `mapping`.
pub fn key_set<L>(mapping: &Mapping<L>) -> BTreeSet<&str> {
    extract_keys(mapping).into_iter().collect()
}

/// Outcome of comparing a document's key set with a template's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyReconciliation {
    /// Keys the template expects but the document lacks.
    pub missing: BTreeSet<String>,
    /// Keys the document has but the template does not expect.
    pub extra: BTreeSet<String>,
}

impl KeyReconciliation {
    /// True when neither missing nor extra keys were found.
    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }

    /// `"Missing Keys = a,b"`, or `None` when nothing is missing.
    pub fn missing_message(&self) -> Option<String> {
        render("Missing Keys", &self.missing)
    }

    /// `"Extra Keys = c"`, or `None` when nothing is extra.
    pub fn extra_message(&self) -> Option<String> {
        render("Extra Keys", &self.extra)
    }
}

fn render(label: &str, keys: &BTreeSet<String>) -> Option<String> {
    if keys.is_empty() {
        return None;
    }
    let joined: Vec<&str> = keys.iter().map(String::as_str).collect();
    Some(format!("{label} = {}", joined.join(",")))
}

impl fmt::Display for KeyReconciliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.missing_message(), self.extra_message()) {
            (Some(missing), Some(extra)) => write!(f, "{missing}  {extra}"),
            (Some(missing), None) => f.write_str(&missing),
            (None, Some(extra)) => f.write_str(&extra),
            (None, None) => f.write_str("No missing or extra keys"),
        }
    }
}

/// Compare the flattened key sets of `document` and `template`.
///
/// - missing = template keys − document keys
/// - extra = document keys − template keys
pub fn reconcile_keys<D, T>(document: &Mapping<D>, template: &Mapping<T>) -> KeyReconciliation {
    let document_keys = key_set(document);
    let template_keys = key_set(template);

    let missing = template_keys
        .difference(&document_keys)
        .map(|k| k.to_string())
        .collect();
    let extra = document_keys
        .difference(&template_keys)
        .map(|k| k.to_string())
        .collect();

    KeyReconciliation { missing, extra }
}
