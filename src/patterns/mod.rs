//! Pattern library: the regex and term families every extraction stage
//! draws on.
//!
//! All matchers are compiled once into immutable statics, so pattern
//! application carries no shared mutable state and parse calls are safe to
//! run concurrently.

use std::sync::LazyLock;

use regex::Regex;

pub mod blocklist;
pub mod families;
pub mod units;

/// Strict dbSNP identifier shape: "rs" followed by at least three digits
pub static RSID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brs\d{3,}\b").expect("static pattern"));

/// Allele pair over {A,C,G,T}, optionally slash-separated ("CT", "C/T")
pub static GENOTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([ACGT]/[ACGT]|[ACGT]{2})\b").expect("static pattern"));

/// Point-mutation notation: letter, digits, letter (e.g. "C677T")
pub static MUTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\d{1,5}[A-Z]\b").expect("static pattern"));

/// Gene symbol shape: 2-8 uppercase alphanumerics starting with a letter.
/// Shape only; callers must also apply the common-word blocklist.
pub static GENE_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9]{1,7}\b").expect("static pattern"));

/// Zygosity words used as a genotype fallback
pub static ZYGOSITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(homozygous|heterozygous)\b").expect("static pattern"));

/// Bare numeric token (integer or decimal)
pub static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("static pattern"));

/// Dash-joined range following a reference-range qualifier word
pub static REF_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:normal|reference|range|ref|desired)\s*[:.]?[^0-9\n]{0,12}(\d+(?:\.\d+)?\s*[-\u{2013}]\s*\d+(?:\.\d+)?)",
    )
    .expect("static pattern")
});

/// Result-status words near a reading; every word here maps to a flag in
/// `BiomarkerStatus::from_word`
pub static STATUS_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(normal|within|wnl|high|elevated|increased|above|low|decreased|reduced|below|critical|panic|alert)\b",
    )
    .expect("static pattern")
});

/// Which record type a candidate should structure into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Biomarker,
    Variant,
}

/// A provisional match from one pattern family, before contextual
/// validation. Candidates never outlive the parse call that produced them.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Matched span, usually the probable analyte name or variant identifier
    pub text: String,

    /// Record type this candidate should resolve to
    pub kind: CandidateKind,

    /// Character offset of the span in the source text
    pub offset: usize,

    /// Identifier of the pattern family that emitted this candidate
    pub pattern: &'static str,
}

impl Candidate {
    pub fn new(
        text: impl Into<String>,
        kind: CandidateKind,
        offset: usize,
        pattern: &'static str,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            offset,
            pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsid_shape() {
        assert!(RSID_RE.is_match("rs1801133"));
        assert!(RSID_RE.is_match("RS4680"));
        assert!(!RSID_RE.is_match("rs12")); // too short
        assert!(!RSID_RE.is_match("rsx123"));
    }

    #[test]
    fn test_genotype_pairs() {
        assert!(GENOTYPE_RE.is_match("CT"));
        assert!(GENOTYPE_RE.is_match("C/T"));
        assert!(!GENOTYPE_RE.is_match("XY"));
        // Lowercase pairs are not genotype notation
        assert!(!GENOTYPE_RE.is_match("ct"));
    }

    #[test]
    fn test_mutation_notation() {
        assert!(MUTATION_RE.is_match("C677T"));
        assert!(MUTATION_RE.is_match("V158M"));
        assert!(!MUTATION_RE.is_match("677T"));
    }

    #[test]
    fn test_ref_range_qualified() {
        let text = "Vitamin D: 25 ng/mL (Normal: 20-50)";
        let caps = REF_RANGE_RE.captures(text).unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "20-50");
    }

    #[test]
    fn test_range_without_qualifier_not_taken_as_reference() {
        assert!(REF_RANGE_RE.captures("measured 20-50 twice").is_none());
    }

    #[test]
    fn test_status_words_all_map_to_flags() {
        use crate::core::types::BiomarkerStatus;

        // The regex and the word-to-flag table must stay in lockstep
        for word in [
            "normal", "within", "wnl", "high", "elevated", "increased", "above", "low",
            "decreased", "reduced", "below", "critical", "panic", "alert",
        ] {
            assert!(STATUS_WORD_RE.is_match(word), "regex misses {word}");
            assert!(
                BiomarkerStatus::from_word(word).is_some(),
                "no flag for {word}"
            );
        }
    }
}
