//! # Validate Subcommand
//!
//! Loads a document and a template (JSON, or YAML by extension), runs the
//! template matcher, and prints the report.
//!
//! Exit codes: 0 when the document matches, 1 when it does not or when a
//! file cannot be loaded.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tmpl_core::{load_document, load_template};
use tmpl_schema::{validate, ValidationReport};

use crate::OutputFormat;

/// Arguments for the `tmpl validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to check.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Template the document must match.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let template = load_template(&args.template)
        .with_context(|| format!("failed to load template {}", args.template.display()))?;
    let document = load_document(&args.document)
        .with_context(|| format!("failed to load document {}", args.document.display()))?;

    let report = validate(&document, &template);

    tracing::info!(
        document = %args.document.display(),
        valid = report.is_valid(),
        "validated document"
    );

    println!("{}", render_report(&report, args.format)?);

    Ok(if report.is_valid() { 0 } else { 1 })
}

/// Format a report for printing.
pub fn render_report(report: &ValidationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")
        }
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if report.is_valid() {
                lines.push("OK: document matches template".to_string());
            } else {
                lines.push("FAIL: document does not match template".to_string());
                for problem in report.problems() {
                    lines.push(format!("  {problem}"));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const TEMPLATE: &str = "a: int\nb:\n  c: str\n";

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(document: PathBuf, template: PathBuf) -> ValidateArgs {
        ValidateArgs {
            document,
            template,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn valid_document_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let template = write(dir.path(), "t.yaml", TEMPLATE);
        let document = write(dir.path(), "d.json", r#"{"a": 1, "b": {"c": "x"}}"#);
        assert_eq!(run_validate(&args(document, template)).unwrap(), 0);
    }

    #[test]
    fn mismatched_document_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let template = write(dir.path(), "t.yaml", TEMPLATE);
        let document = write(dir.path(), "d.json", r#"{"a": "s", "b": {"c": 3}}"#);
        assert_eq!(run_validate(&args(document, template)).unwrap(), 1);
    }

    #[test]
    fn missing_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = write(dir.path(), "t.yaml", TEMPLATE);
        let err = run_validate(&args(dir.path().join("absent.json"), template)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load document"));
    }

    #[test]
    fn bad_template_tag_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = write(dir.path(), "t.yaml", "a: dict\n");
        let document = write(dir.path(), "d.json", r#"{"a": 1}"#);
        let err = run_validate(&args(document, template)).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to load template"), "got: {chain}");
        assert!(chain.contains("at 'a'"), "got: {chain}");
        assert!(chain.contains("unknown type \"dict\""), "got: {chain}");
    }

    #[test]
    fn text_rendering_lists_problems() {
        let template = tmpl_core::template_from_json(&serde_json::json!({
            "a": "int",
            "b": {"c": "str"}
        }))
        .unwrap();
        let document = tmpl_core::document_from_json(&serde_json::json!({
            "a": "s",
            "b": {"c": 3}
        }))
        .unwrap();
        let text = render_report(&validate(&document, &template), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "FAIL: document does not match template\n  \
             Data type mismatch at value s: expected int, got str\n  \
             Data type mismatch at value 3: expected str, got int"
        );
    }

    #[test]
    fn json_rendering_is_parseable() {
        let template =
            tmpl_core::template_from_json(&serde_json::json!({ "a": "int" })).unwrap();
        let document = tmpl_core::document_from_json(&serde_json::json!({ "a": 1 })).unwrap();
        let json = render_report(&validate(&document, &template), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["types"]["status"], "compared");
    }
}
