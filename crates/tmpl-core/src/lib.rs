//! # tmpl-core — Foundational Types for the Template Matcher
//!
//! Defines the tree model shared by documents and templates, the leaf
//! value and type-tag enums, the error hierarchy, and loaders that turn
//! JSON/YAML into trees. Every other crate in the workspace depends on
//! `tmpl-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit nesting.** A [`Node`] is either `Leaf` or `Branch`.
//!    Traversals match on the tag; nothing inspects runtime types.
//!
//! 2. **Tags, not type objects.** Template leaves are [`TypeTag`]s and a
//!    [`Value`] conforms when its own tag is equal to the expected one.
//!
//! 3. **Insertion order is part of the data.** [`Mapping`] keeps entries
//!    in the order they were inserted (or appeared in the source file).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tmpl-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod ordered;
pub mod source;
pub mod tally;
pub mod tree;
pub mod value;

pub use error::TmplError;
pub use ordered::OrderedMap;
pub use source::{
    document_from_json, load_document, load_json_value, load_template, template_from_json,
};
pub use tally::{merge_tallies, Tally};
pub use tree::{Document, Mapping, Node, Template};
pub use value::{TypeTag, Value};
