use serde::{Deserialize, Serialize};

use crate::core::biomarker::BiomarkerRecord;
use crate::core::types::DocumentType;
use crate::core::variant::VariantRecord;

/// Observability tag identifying the extraction method that produced a result
pub const METHOD_PATTERN_PIPELINE: &str = "pattern-pipeline";

/// Result of parsing one uploaded report's extracted text.
///
/// Failure modes degrade to values rather than errors: an unclassifiable
/// document carries `error` plus empty record lists, and a classified
/// document with zero records is a valid (warn-worthy) result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Classified report kind
    pub document_type: DocumentType,

    /// Biomarker readings, post-dedup, in first-seen order
    pub biomarkers: Vec<BiomarkerRecord>,

    /// Variant observations, post-dedup, in first-seen order
    pub variants: Vec<VariantRecord>,

    /// Document-level confidence in [0, 1]
    pub confidence: f64,

    /// Extraction method tag for observability
    pub method: String,

    /// Document-level diagnostic when classification failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedDocument {
    /// An empty result for a document neither indicator set could claim.
    #[must_use]
    pub fn unclassified(reason: impl Into<String>) -> Self {
        Self {
            document_type: DocumentType::Unknown,
            biomarkers: Vec::new(),
            variants: Vec::new(),
            confidence: 0.0,
            method: METHOD_PATTERN_PIPELINE.to_string(),
            error: Some(reason.into()),
        }
    }

    /// Total records of both kinds.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.biomarkers.len() + self.variants.len()
    }

    /// True when classification succeeded but nothing was extracted.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.error.is_none() && self.record_count() == 0
    }
}
