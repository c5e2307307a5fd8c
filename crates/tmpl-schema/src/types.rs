//! # Value-Type Reconciliation
//!
//! Pairs each document leaf with the template leaf at the same position in
//! the stack traversal order (see [`crate::leaves`]) and reports every pair
//! whose value does not carry the expected [`TypeTag`].
//!
//! When the two trees have different leaf counts, positions no longer line
//! up and no pairwise comparison is attempted; a single
//! [`TypeCheck::LeafCountMismatch`] is returned instead.

use std::fmt;

use serde::Serialize;
use tmpl_core::{Document, Template, TypeTag, Value};

use crate::leaves::extract_leaves;

/// Rendered form of [`TypeCheck::LeafCountMismatch`].
pub const LEAF_COUNT_MISMATCH_MESSAGE: &str =
    "There is a missing key so no comparison is being made";

/// One leaf whose value does not match the template's expected tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMismatch {
    /// Position in the leaf sequence.
    pub position: usize,
    /// The offending document value.
    pub value: Value,
    /// Tag the template expects at this position.
    pub expected: TypeTag,
    /// Tag of the document value.
    pub actual: TypeTag,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data type mismatch at value {}: expected {}, got {}",
            self.value, self.expected, self.actual
        )
    }
}

/// Outcome of comparing document leaves with template leaf tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TypeCheck {
    /// Leaves were compared pairwise. An empty list means every leaf conforms.
    Compared {
        mismatches: Vec<TypeMismatch>,
    },
    /// The trees have different numbers of leaves, so nothing was compared.
    LeafCountMismatch {
        document_leaves: usize,
        template_leaves: usize,
    },
}

impl TypeCheck {
    /// True when leaves were compared and none mismatched.
    pub fn is_conformant(&self) -> bool {
        matches!(self, Self::Compared { mismatches } if mismatches.is_empty())
    }

    /// The mismatches found, or an empty slice when nothing was compared.
    pub fn mismatches(&self) -> &[TypeMismatch] {
        match self {
            Self::Compared { mismatches } => mismatches,
            Self::LeafCountMismatch { .. } => &[],
        }
    }

    /// Human-readable lines: one per mismatch, or the fixed leaf-count
    /// message. Empty when conformant.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Compared { mismatches } => mismatches.iter().map(ToString::to_string).collect(),
            Self::LeafCountMismatch { .. } => vec![LEAF_COUNT_MISMATCH_MESSAGE.to_string()],
        }
    }
}

impl fmt::Display for TypeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeafCountMismatch { .. } => f.write_str(LEAF_COUNT_MISMATCH_MESSAGE),
            Self::Compared { mismatches } if mismatches.is_empty() => {
                f.write_str("All values match their expected types")
            }
            Self::Compared { mismatches } => {
                for (i, m) in mismatches.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{m}")?;
                }
                Ok(())
            }
        }
    }
}

/// Compare the leaf values of `document` with the leaf tags of `template`.
pub fn reconcile_types(document: &Document, template: &Template) -> TypeCheck {
    let values = extract_leaves(document);
    let expected = extract_leaves(template);

    tracing::debug!(
        document_leaves = values.len(),
        template_leaves = expected.len(),
        "extracted leaves"
    );

    if values.len() != expected.len() {
        return TypeCheck::LeafCountMismatch {
            document_leaves: values.len(),
            template_leaves: expected.len(),
        };
    }

    let mismatches = values
        .into_iter()
        .zip(expected)
        .enumerate()
        .filter(|(_, (value, tag))| !tag.admits(value))
        .map(|(position, (value, tag))| TypeMismatch {
            position,
            value: value.clone(),
            expected: *tag,
            actual: value.type_tag(),
        })
        .collect();

    TypeCheck::Compared { mismatches }
}
