//! Document classifier: genetic vs. blood vs. unknown.
//!
//! Two disjoint indicator sets are counted over the raw text. The policy is
//! deliberately asymmetric: a document with a handful of incidental
//! genetic-sounding terms must not be misclassified, so the winning set needs
//! a strictly higher count AND at least [`MIN_INDICATOR_SCORE`] matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::DocumentType;
use crate::patterns::units::UNIT_RE;

/// Minimum indicator matches the winning set must reach.
/// Heuristic policy constant; revisit against a labeled corpus before tuning.
pub const MIN_INDICATOR_SCORE: usize = 3;

/// Indicators that a document reports genetic test results
static GENETIC_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\brs\d{3,}\b",
        r"(?i)\b(homozygous|heterozygous|zygosity)\b",
        r"\b[ACGT]/[ACGT]\b",
        r"(?i)\bvariants?\b",
        r"(?i)\balleles?\b",
        r"(?i)\bgenotypes?\b",
        r"(?i)\bmutations?\b",
        r"(?i)\bchromosomes?\b",
        r"(?i)\bsnps?\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

/// Indicators that a document reports a blood panel
static BLOOD_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\breference\s+range\b",
        r"(?i)\b(hemoglobin|hematocrit|glucose|cholesterol|triglycerides?|ferritin|creatinine|platelets?|vitamin)\b",
        r"(?i)\b(tsh|hdl|ldl|wbc|rbc|a1c|ast|alt)\b",
        r"(?i)\b(serum|plasma|whole\s+blood)\b",
        r"(?i)\banalytes?\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

/// Count all matches of every indicator in the set.
fn indicator_score(text: &str, indicators: &[Regex]) -> usize {
    indicators.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Indicator counts for (genetic, blood). Exposed for diagnostics.
#[must_use]
pub fn indicator_scores(text: &str) -> (usize, usize) {
    let genetic = indicator_score(text, &GENETIC_INDICATORS);
    // Concentration units count toward the blood score alongside vocabulary
    let blood =
        indicator_score(text, &BLOOD_INDICATORS) + UNIT_RE.find_iter(text).count();
    (genetic, blood)
}

/// Classify raw report text. Pure function, no side effects.
///
/// Returns [`DocumentType::Unknown`] when neither score reaches
/// [`MIN_INDICATOR_SCORE`] or the scores tie.
#[must_use]
pub fn classify(text: &str) -> DocumentType {
    let (genetic, blood) = indicator_scores(text);

    if genetic < MIN_INDICATOR_SCORE && blood < MIN_INDICATOR_SCORE {
        return DocumentType::Unknown;
    }

    if genetic > blood && genetic >= MIN_INDICATOR_SCORE {
        DocumentType::Genetic
    } else if blood > genetic && blood >= MIN_INDICATOR_SCORE {
        DocumentType::Blood
    } else {
        DocumentType::Unknown
    }
}
