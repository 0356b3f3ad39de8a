//! Deduplicator: collapses records independently recovered by different
//! pattern families.
//!
//! First-seen-wins on the typed dedup key, preserving input order. All
//! families read the same source text, so true duplicates are semantically
//! equivalent; partially-overlapping-but-distinct records are NOT merged
//! (documented simplification; see DESIGN notes).

use std::collections::HashSet;

use crate::core::biomarker::BiomarkerRecord;
use crate::core::variant::VariantRecord;

/// Collapse biomarkers on (normalized name, value), first seen wins.
#[must_use]
pub fn dedup_biomarkers(records: Vec<BiomarkerRecord>) -> Vec<BiomarkerRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.dedup_key()))
        .collect()
}

/// Collapse variants on (rsid or gene, genotype, mutation), first seen wins.
#[must_use]
pub fn dedup_variants(records: Vec<VariantRecord>) -> Vec<VariantRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.dedup_key()))
        .collect()
}
