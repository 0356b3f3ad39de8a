//! Confidence scoring for individual records and whole documents.
//!
//! Per-record confidence starts from a base and rises with specificity; the
//! document score is the mean record confidence plus a bounded bonus for
//! corroborating record count. All scores stay in [0, 1].

use crate::core::biomarker::BiomarkerRecord;
use crate::core::variant::{VariantRecord, UNKNOWN_GENOTYPE};
use crate::patterns::RSID_RE;

/// Base confidence for any record that survived structuring
pub const BASE_CONFIDENCE: f64 = 0.3;

/// Bonus for a biomarker value adjacent to a recognized unit
const UNIT_BONUS: f64 = 0.35;

/// Bonus for an attached reference range
const RANGE_BONUS: f64 = 0.15;

/// Bonus for an inferred status flag
const STATUS_BONUS: f64 = 0.05;

/// Bonus for a strict-shape rsID; dominates the variant score
const RSID_BONUS: f64 = 0.55;

/// Bonus for a recognized gene symbol
const GENE_BONUS: f64 = 0.15;

/// Bonus for a resolved genotype
const GENOTYPE_BONUS: f64 = 0.1;

/// Bonus for point-mutation notation
const MUTATION_BONUS: f64 = 0.05;

/// Per-document bonus per corroborating record, capped by [`MAX_COUNT_BONUS`]
const COUNT_BONUS_PER_RECORD: f64 = 0.02;

/// Cap on the document-level record-count bonus
const MAX_COUNT_BONUS: f64 = 0.2;

fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

/// Score a structured biomarker record.
#[must_use]
pub fn score_biomarker(record: &BiomarkerRecord) -> f64 {
    let mut score = BASE_CONFIDENCE;
    if !record.unit.is_empty() {
        score += UNIT_BONUS;
    }
    if record.reference_range.is_some() {
        score += RANGE_BONUS;
    }
    if record.status.is_some() {
        score += STATUS_BONUS;
    }
    clamp(score)
}

/// Score a structured variant record. A strict-shape rsID alone is
/// near-maximal; a bare gene symbol without rsID or genotype scores low.
#[must_use]
pub fn score_variant(record: &VariantRecord) -> f64 {
    let mut score = BASE_CONFIDENCE;
    if record
        .rsid
        .as_deref()
        .is_some_and(|r| RSID_RE.is_match(r))
    {
        score += RSID_BONUS;
    }
    if record.gene.is_some() {
        score += GENE_BONUS;
    }
    if record.genotype != UNKNOWN_GENOTYPE {
        score += GENOTYPE_BONUS;
    }
    if record.mutation.is_some() {
        score += MUTATION_BONUS;
    }
    clamp(score)
}

/// Document confidence: mean per-record confidence plus a bounded bonus
/// proportional to record count. Non-decreasing in record count for fixed
/// per-record confidence; 0.0 for an empty record set.
#[must_use]
pub fn score_document(record_confidences: &[f64]) -> f64 {
    if record_confidences.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = record_confidences.len() as f64;
    let mean = record_confidences.iter().sum::<f64>() / n;
    let count_bonus = (n * COUNT_BONUS_PER_RECORD).min(MAX_COUNT_BONUS);

    clamp(mean + count_bonus)
}
