use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::types::DocumentType;
use crate::extract::classifier;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Report text file
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct Classification {
    file: String,
    document_type: DocumentType,
    genetic_score: usize,
    blood_score: usize,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)?;
    let (genetic_score, blood_score) = classifier::indicator_scores(&text);
    let result = Classification {
        file: args.file.display().to_string(),
        document_type: classifier::classify(&text),
        genetic_score,
        blood_score,
    };

    match format {
        OutputFormat::Text => {
            println!("{}: {}", result.file, result.document_type);
            println!(
                "  indicators: genetic={} blood={} (threshold {})",
                result.genetic_score,
                result.blood_score,
                classifier::MIN_INDICATOR_SCORE
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
