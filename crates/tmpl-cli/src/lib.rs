//! # tmpl-cli — Command-Line Interface for the Template Matcher
//!
//! Provides the `tmpl` binary.
//!
//! ## Subcommands
//!
//! - `tmpl validate` — Match a document file against a template file.
//! - `tmpl tally` — Merge count files and rank the totals.
//!
//! ```bash
//! tmpl validate payload.json --template user.template.yaml
//! tmpl validate payload.json --template user.template.yaml --format json
//! tmpl tally survey-a.json survey-b.yaml
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in submodules.
//! - Handlers delegate to `tmpl-core` and `tmpl-schema` and only format output.
//! - Handlers return process exit codes: 0 on success, 1 on failure.

pub mod tally;
pub mod validate;

use clap::ValueEnum;

/// Output format shared by subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}
