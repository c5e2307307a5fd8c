//! # tmpl-schema — Template Matching
//!
//! Checks a nested [`Document`](tmpl_core::Document) against a nested
//! [`Template`](tmpl_core::Template) of the same shape. Two independent
//! checks run:
//!
//! - **Key reconciliation** ([`keys`]): the flattened key sets of both
//!   trees are compared, reporting missing and extra keys.
//! - **Value-type reconciliation** ([`types`]): leaves are extracted from
//!   both trees with the same stack traversal ([`leaves`]) and compared
//!   position by position against the template's type tags.
//!
//! [`validate`](validate::validate) runs both and returns a
//! [`ValidationReport`].
//!
//! ## Crate Policy
//!
//! - Depends only on `tmpl-core` internally.
//! - Matching never errors or panics. Problems are data in the report.
//! - Matching is pure: inputs are borrowed, nothing is cached or shared.

pub mod keys;
pub mod leaves;
pub mod types;
pub mod validate;

pub use keys::{extract_keys, key_set, reconcile_keys, KeyReconciliation};
pub use leaves::{extract_leaves, leaf_count};
pub use types::{reconcile_types, TypeCheck, TypeMismatch, LEAF_COUNT_MISMATCH_MESSAGE};
pub use validate::{validate, TemplateMatcher, TemplateMismatch, ValidationReport};
