use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::core::document::ParsedDocument;
use crate::core::types::ConfidenceLevel;
use crate::extract::context::DEFAULT_WORD_RADIUS;
use crate::extract::pipeline;

#[derive(Args)]
pub struct ParseArgs {
    /// Report text files (UTF-8, already extracted from PDF)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Context window radius, in words
    #[arg(long, default_value_t = DEFAULT_WORD_RADIUS)]
    pub radius: usize,
}

/// Per-file result envelope for batch output
#[derive(Debug, Serialize)]
pub struct FileResult {
    pub file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ParsedDocument>,

    /// Set when the file itself could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
}

/// Parse each file independently. A failure on one file is recorded and must
/// not abort processing of its siblings.
pub fn parse_batch(files: &[PathBuf], radius: usize) -> Vec<FileResult> {
    files
        .iter()
        .map(|path| match std::fs::read_to_string(path) {
            Ok(text) => FileResult {
                file: path.display().to_string(),
                document: Some(pipeline::parse_with_radius(&text, radius)),
                read_error: None,
            },
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unreadable file");
                FileResult {
                    file: path.display().to_string(),
                    document: None,
                    read_error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error only when every file in the batch failed to read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let results = parse_batch(&args.files, args.radius);

    if results.iter().all(|r| r.document.is_none()) {
        anyhow::bail!("no input file could be read");
    }

    match format {
        OutputFormat::Text => {
            for result in &results {
                print_text_result(result, verbose);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn print_text_result(result: &FileResult, verbose: bool) {
    println!("=== {} ===", result.file);

    let Some(doc) = &result.document else {
        println!(
            "  read error: {}",
            result.read_error.as_deref().unwrap_or("unknown")
        );
        return;
    };

    if let Some(error) = &doc.error {
        println!("  error: {error}");
        return;
    }

    println!(
        "  type: {}  confidence: {:.2} ({:?})",
        doc.document_type,
        doc.confidence,
        ConfidenceLevel::from_score(doc.confidence)
    );

    if doc.is_empty_result() {
        println!("  warning: classified but no records extracted");
    }

    for b in &doc.biomarkers {
        let range = b
            .reference_range
            .as_deref()
            .map(|r| format!("  range {r}"))
            .unwrap_or_default();
        let status = b
            .status
            .map(|s| format!("  [{s}]"))
            .unwrap_or_default();
        println!("  {} = {} {}{range}{status}", b.name, b.value, b.unit);
    }

    for v in &doc.variants {
        println!(
            "  {} {} genotype {}{}",
            v.rsid.as_deref().unwrap_or("-"),
            v.gene.as_deref().unwrap_or("-"),
            v.genotype,
            v.mutation
                .as_deref()
                .map(|m| format!(" ({m})"))
                .unwrap_or_default()
        );
    }

    if verbose {
        println!("  method: {}  records: {}", doc.method, doc.record_count());
    }
}
