//! The extraction pipeline: classify, scan, contextualize, structure, score,
//! dedup.
//!
//! One configurable pipeline keyed by document type replaces per-vendor
//! parser variants. `parse` is a pure function of its text: no shared mutable
//! state survives a call, so a batch of files may run concurrently without
//! coordination.

use tracing::debug;

use crate::core::document::{ParsedDocument, METHOD_PATTERN_PIPELINE};
use crate::core::types::DocumentType;
use crate::extract::context::{self, DEFAULT_WORD_RADIUS};
use crate::extract::structurer::{self, ExtractedRecord};
use crate::extract::{classifier, confidence, dedup};
use crate::patterns::families;

/// Parse one document's extracted text with the default context radius.
#[must_use]
pub fn parse(text: &str) -> ParsedDocument {
    parse_with_radius(text, DEFAULT_WORD_RADIUS)
}

/// Parse one document's extracted text.
///
/// Classification failure is a value, not an error: the result carries a
/// document-level diagnostic and empty record lists. A classified document
/// with zero extracted records is likewise a valid result.
#[must_use]
pub fn parse_with_radius(text: &str, radius: usize) -> ParsedDocument {
    let document_type = classifier::classify(text);
    if document_type == DocumentType::Unknown {
        let (genetic, blood) = classifier::indicator_scores(text);
        debug!(genetic, blood, "classification indeterminate");
        return ParsedDocument::unclassified(
            "document did not classify as a genetic or blood test report",
        );
    }

    let mut biomarkers = Vec::new();
    let mut variants = Vec::new();

    for family in families::families_for(document_type) {
        let candidates = family.scan(text);
        debug!(family = family.id(), count = candidates.len(), "scanned");

        for candidate in candidates {
            let window = context::extract(text, candidate.offset, radius);
            match structurer::structure(&candidate, &window) {
                Some(ExtractedRecord::Biomarker(record)) => biomarkers.push(record),
                Some(ExtractedRecord::Variant(record)) => variants.push(record),
                None => {}
            }
        }
    }

    let biomarkers = dedup::dedup_biomarkers(biomarkers);
    let variants = dedup::dedup_variants(variants);

    let record_confidences: Vec<f64> = biomarkers
        .iter()
        .map(|r| r.confidence)
        .chain(variants.iter().map(|r| r.confidence))
        .collect();
    let document_confidence = confidence::score_document(&record_confidences);

    debug!(
        %document_type,
        biomarkers = biomarkers.len(),
        variants = variants.len(),
        confidence = document_confidence,
        "parse complete"
    );

    ParsedDocument {
        document_type,
        biomarkers,
        variants,
        confidence: document_confidence,
        method: METHOD_PATTERN_PIPELINE.to_string(),
        error: None,
    }
}
