//! # report-parser
//!
//! A library for recovering structured data from lab report text.
//!
//! Health reports arrive as free text extracted out of vendor PDFs: blood
//! panels with analyte readings, and genetic tests with SNP calls. Layouts
//! vary wildly between vendors, so no single pattern covers them all.
//!
//! `report-parser` classifies each document, runs a set of redundant
//! extraction heuristics over it, and emits typed [`BiomarkerRecord`] or
//! [`VariantRecord`] rows with per-document confidence scores. Extracted
//! variants can then be reconciled against the embedded catalog of
//! product-supported SNPs.
//!
//! ## Features
//!
//! - **Document classification**: genetic vs. blood via indicator scoring
//! - **Redundant pattern families**: several regex families per document
//!   type, so one vendor layout failing does not lose the record
//! - **Context windows**: fields are resolved from words around each
//!   candidate hit, not from the whole document
//! - **Confidence scoring**: per-record and per-document scores in [0, 1]
//! - **Canonical matching**: cascaded reconciliation of variants against
//!   the supported-SNP catalog, with unmatched records kept as-is
//!
//! ## Example
//!
//! ```rust
//! use report_parser::{parse, DocumentType, SnpCatalog, SnpMatcher};
//!
//! let doc = parse("MTHFR C677T rs1801133 Heterozygous CT variant detected");
//! assert_eq!(doc.document_type, DocumentType::Genetic);
//! assert_eq!(doc.variants.len(), 1);
//!
//! // Reconcile against the supported-SNP catalog
//! let catalog = SnpCatalog::load_embedded().unwrap();
//! let matcher = SnpMatcher::new(&catalog);
//! let matches = matcher.match_all(&doc.variants);
//! assert!(matches[0].is_matched());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record and document types
//! - [`patterns`]: Compiled regex families, unit table, blocklists
//! - [`extract`]: Classifier, context windows, structurer, scorer, pipeline
//! - [`catalog`]: Supported-SNP catalog storage and canonical matching
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod extract;
pub mod patterns;

// Re-export commonly used types for convenience
pub use crate::catalog::matcher::{SnpMatcher, VariantMatch};
pub use crate::catalog::store::SnpCatalog;
pub use crate::core::biomarker::BiomarkerRecord;
pub use crate::core::document::ParsedDocument;
pub use crate::core::types::*;
pub use crate::core::variant::VariantRecord;
pub use crate::extract::pipeline::{parse, parse_with_radius};
