//! # Error Types
//!
//! Operational errors for building documents and templates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Matching itself never fails: missing keys, extra keys and type
//! mismatches are returned as report values by `tmpl-schema`. The errors
//! here cover everything that happens before a match can run: reading
//! files, parsing JSON/YAML, and interpreting template leaves.

use thiserror::Error;

/// Top-level error type for tmpl.
#[derive(Error, Debug)]
pub enum TmplError {
    /// A template leaf named a type that has no `TypeTag`.
    #[error("unknown type tag: {0:?}")]
    UnknownTypeTag(String),

    /// A template leaf was not a type name.
    #[error("invalid template leaf at '{path}': expected a type name, found {found}")]
    InvalidTemplateLeaf {
        /// Dotted key path to the offending leaf.
        path: String,
        /// Short description of what was found instead.
        found: String,
    },

    /// The root of a document or template was not a mapping.
    #[error("{what} root must be a mapping, found {found}")]
    NotAMapping {
        /// "document" or "template".
        what: &'static str,
        /// Short description of what was found instead.
        found: String,
    },

    /// A source file could not be read or parsed.
    #[error("load error for '{path}': {reason}")]
    Load {
        /// Path to the file that failed to load.
        path: String,
        /// Reason the file could not be loaded.
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
