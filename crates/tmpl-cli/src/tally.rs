//! # Tally Subcommand
//!
//! Merges JSON/YAML files of `key: count` pairs and prints the totals,
//! highest count first.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tmpl_core::{load_json_value, merge_tallies, Tally};

use crate::OutputFormat;

/// Arguments for the `tmpl tally` subcommand.
#[derive(Args, Debug)]
pub struct TallyArgs {
    /// Count files to merge.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the tally subcommand.
///
/// Returns 1 without output when no files are given.
pub fn run_tally(args: &TallyArgs) -> Result<u8> {
    let tallies = args
        .files
        .iter()
        .map(|path| {
            let json = load_json_value(path)?;
            Tally::from_json(&json)
        })
        .collect::<Result<Vec<Tally>, _>>()
        .context("failed to load tally files")?;

    let Some(merged) = merge_tallies(&tallies) else {
        tracing::warn!("no tally files given");
        return Ok(1);
    };

    println!("{}", render_tally(&merged, args.format)?);
    Ok(0)
}

/// Format merged counts for printing.
pub fn render_tally(merged: &[(String, u64)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = merged
                .iter()
                .map(|(k, n)| (k.clone(), serde_json::Value::from(*n)))
                .collect();
            serde_json::to_string_pretty(&object).context("failed to serialize tally")
        }
        OutputFormat::Text => Ok(merged
            .iter()
            .map(|(k, n)| format!("{k}: {n}"))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
