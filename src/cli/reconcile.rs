use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::catalog::matcher::{SnpMatcher, VariantMatch};
use crate::catalog::store::SnpCatalog;
use crate::cli::parse::parse_batch;
use crate::cli::OutputFormat;
use crate::core::types::DocumentType;
use crate::extract::context::DEFAULT_WORD_RADIUS;

#[derive(Args)]
pub struct ReconcileArgs {
    /// Report text files (UTF-8, already extracted from PDF)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Context window radius, in words
    #[arg(long, default_value_t = DEFAULT_WORD_RADIUS)]
    pub radius: usize,

    /// Path to a custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FileReconciliation {
    file: String,
    document_type: DocumentType,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,

    matches: Vec<VariantMatch>,
}

/// Execute reconcile subcommand: parse each file, then run extracted
/// variants through the canonical matcher.
///
/// The catalog is loaded once per batch, before any parsing; the only
/// I/O-bound step does not interleave with extraction.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or every file failed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReconcileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        SnpCatalog::load_from_file(path)?
    } else {
        SnpCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} supported SNPs", catalog.len());
    }

    let matcher = SnpMatcher::new(&catalog);
    let results = parse_batch(&args.files, args.radius);

    if results.iter().all(|r| r.document.is_none()) {
        anyhow::bail!("no input file could be read");
    }

    let mut reconciliations = Vec::new();
    for result in results {
        let Some(doc) = result.document else {
            warn!(file = %result.file, "unreadable file excluded from reconciliation");
            continue;
        };
        reconciliations.push(FileReconciliation {
            file: result.file,
            document_type: doc.document_type,
            error: doc.error,
            matches: matcher.match_all(&doc.variants),
        });
    }

    match format {
        OutputFormat::Text => {
            for r in &reconciliations {
                print_text_reconciliation(r);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reconciliations)?);
        }
    }

    Ok(())
}

fn print_text_reconciliation(r: &FileReconciliation) {
    println!("=== {} ({}) ===", r.file, r.document_type);

    if let Some(error) = &r.error {
        println!("  error: {error}");
        return;
    }
    if r.matches.is_empty() {
        println!("  no variants extracted");
        return;
    }

    for m in &r.matches {
        let identity = m
            .record
            .rsid
            .as_deref()
            .or(m.record.gene.as_deref())
            .unwrap_or("-");
        match &m.supported_snp_id {
            Some(id) => println!("  {identity} -> {id} (stage: {})", m.stage),
            None => println!("  {identity} -> unmatched (kept as raw pass-through)"),
        }
    }
}
