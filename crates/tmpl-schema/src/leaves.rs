//! # Leaf Extraction
//!
//! Flattens a tree into its ordered leaf sequence with an explicit stack.
//!
//! The root is pushed first. Each popped mapping is scanned in insertion
//! order: leaves are emitted immediately and child mappings are pushed.
//! Because the stack is LIFO, the last child mapping of a level is
//! expanded first:
//!
//! ```text
//! {a: 1, b: {c: 2}, d: {e: 3}}   →   [1, 3, 2]
//! ```
//!
//! Documents and templates must be flattened with this same function so
//! that position `i` in one sequence corresponds to position `i` in the
//! other.

use tmpl_core::{Mapping, Node};

/// Leaves of `mapping` in stack traversal order.
pub fn extract_leaves<L>(mapping: &Mapping<L>) -> Vec<&L> {
    let mut leaves = Vec::new();
    let mut stack = vec![mapping];

    while let Some(current) = stack.pop() {
        for (_, node) in current.iter() {
            match node {
                Node::Branch(inner) => stack.push(inner),
                Node::Leaf(leaf) => leaves.push(leaf),
            }
        }
    }

    leaves
}

/// Number of leaves in `mapping`.
pub fn leaf_count<L>(mapping: &Mapping<L>) -> usize {
    extract_leaves(mapping).len()
}
