//! Command-line interface for report-parser.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Extract biomarkers/variants from one or more report text files
//! - **classify**: Show the document type and indicator scores for a file
//! - **reconcile**: Parse files and match variants against the SNP catalog
//! - **catalog**: List, show, or export the supported-SNP catalog
//!
//! ## Usage
//!
//! ```text
//! # Parse an extracted report
//! report-parser parse bloodwork.txt
//!
//! # JSON output for scripting
//! report-parser parse bloodwork.txt --format json
//!
//! # Batch: one bad file does not abort the rest
//! report-parser parse a.txt b.txt c.txt
//!
//! # Match a genetic report against the supported-SNP catalog
//! report-parser reconcile dna_results.txt
//!
//! # Inspect the catalog
//! report-parser catalog list
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod classify;
pub mod parse;
pub mod reconcile;

#[derive(Parser)]
#[command(name = "report-parser")]
#[command(version)]
#[command(about = "Recover structured biomarkers and genetic variants from lab report text")]
#[command(
    long_about = "report-parser recovers structured data from free text extracted out of blood-test and genetic-test reports.\n\nIt classifies each document, runs redundant extraction heuristics over it, and emits typed biomarker or variant records with confidence scores. Extracted variants can be reconciled against the catalog of product-supported SNPs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse report text files into biomarker/variant records
    Parse(parse::ParseArgs),

    /// Classify a report file without extracting records
    Classify(classify::ClassifyArgs),

    /// Parse files and reconcile variants against the SNP catalog
    Reconcile(reconcile::ReconcileArgs),

    /// Manage the supported-SNP catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
