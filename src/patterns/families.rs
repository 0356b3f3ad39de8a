//! Pattern families: independently pluggable extraction heuristics.
//!
//! No single regex reliably covers every vendor's formatting, so several
//! structurally different families scan the same text and the pipeline
//! reconciles their output downstream. Supporting a new vendor layout means
//! registering a family here, not editing a monolithic grammar.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::DocumentType;
use crate::patterns::blocklist::is_plausible_gene_symbol;
use crate::patterns::units;
use crate::patterns::{Candidate, CandidateKind, RSID_RE};

/// One extraction heuristic: scans full text, emits tagged candidate spans.
///
/// Implementations must be stateless so a registry of families can be shared
/// across concurrent parse calls.
pub trait PatternFamily: Send + Sync {
    /// Stable identifier, recorded on every candidate for observability
    fn id(&self) -> &'static str;

    /// Document type this family applies to
    fn document_type(&self) -> DocumentType;

    /// Scan the full text and emit one candidate per match
    fn scan(&self, text: &str) -> Vec<Candidate>;
}

fn name_capture_candidates(
    re: &Regex,
    text: &str,
    id: &'static str,
    kind: CandidateKind,
) -> Vec<Candidate> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            Some(Candidate::new(m.as_str().trim(), kind, m.start(), id))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Blood families
// ---------------------------------------------------------------------------

/// Analyte name directly adjacent to a value-plus-recognized-unit pair.
/// The highest-precision blood heuristic, registered first so its spans win
/// first-seen dedup.
pub struct ValueUnitFamily;

static VALUE_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?im)([A-Za-z][A-Za-z0-9 ()/'-]{{1,39}}?)\s*:?\s*(\d+(?:\.\d+)?)\s*({})",
        units::unit_alternation()
    ))
    .expect("static pattern")
});

impl PatternFamily for ValueUnitFamily {
    fn id(&self) -> &'static str {
        "blood/value-unit"
    }

    fn document_type(&self) -> DocumentType {
        DocumentType::Blood
    }

    fn scan(&self, text: &str) -> Vec<Candidate> {
        name_capture_candidates(&VALUE_UNIT_RE, text, self.id(), CandidateKind::Biomarker)
    }
}

/// Colon-separated "Name: Value" lines, with or without a unit.
pub struct ColonPairFamily;

static COLON_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z0-9 ()/'-]{1,39}?)\s*:\s*(\d+(?:\.\d+)?)")
        .expect("static pattern")
});

impl PatternFamily for ColonPairFamily {
    fn id(&self) -> &'static str {
        "blood/colon-pair"
    }

    fn document_type(&self) -> DocumentType {
        DocumentType::Blood
    }

    fn scan(&self, text: &str) -> Vec<Candidate> {
        name_capture_candidates(&COLON_PAIR_RE, text, self.id(), CandidateKind::Biomarker)
    }
}

/// Table rows where columns are separated by runs of two or more spaces,
/// the dominant layout in text extracted from tabular PDFs.
pub struct TableRowFamily;

static TABLE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Za-z][A-Za-z0-9 ()/'-]{1,39}?)[ \t]{2,}(\d+(?:\.\d+)?)")
        .expect("static pattern")
});

impl PatternFamily for TableRowFamily {
    fn id(&self) -> &'static str {
        "blood/table-row"
    }

    fn document_type(&self) -> DocumentType {
        DocumentType::Blood
    }

    fn scan(&self, text: &str) -> Vec<Candidate> {
        name_capture_candidates(&TABLE_ROW_RE, text, self.id(), CandidateKind::Biomarker)
    }
}

/// Lines carrying a reading together with a qualified reference range
/// ("Normal: 20-50", "Reference range 0.4-4.0").
pub struct RangeLineFamily;

static RANGE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[^\n]*?([A-Za-z][A-Za-z0-9 ()/'-]{1,39}?)\s*:?\s*(\d+(?:\.\d+)?)[^\n]*?(?:normal|reference|range|desired)[^\n]*?\d+(?:\.\d+)?\s*[-\u{2013}]\s*\d+(?:\.\d+)?",
    )
    .expect("static pattern")
});

impl PatternFamily for RangeLineFamily {
    fn id(&self) -> &'static str {
        "blood/range-line"
    }

    fn document_type(&self) -> DocumentType {
        DocumentType::Blood
    }

    fn scan(&self, text: &str) -> Vec<Candidate> {
        name_capture_candidates(&RANGE_LINE_RE, text, self.id(), CandidateKind::Biomarker)
    }
}

// ---------------------------------------------------------------------------
// Genetic families
// ---------------------------------------------------------------------------

/// Every rsID occurrence; gene and genotype are resolved from context.
pub struct RsidFamily;

impl PatternFamily for RsidFamily {
    fn id(&self) -> &'static str {
        "genetic/rsid"
    }

    fn document_type(&self) -> DocumentType {
        DocumentType::Genetic
    }

    fn scan(&self, text: &str) -> Vec<Candidate> {
        RSID_RE
            .find_iter(text)
            .map(|m| Candidate::new(m.as_str(), CandidateKind::Variant, m.start(), self.id()))
            .collect()
    }
}

/// Gene symbol with a genotype or point mutation on the same line within a
/// short distance. Catches vendor layouts that omit rsIDs entirely.
pub struct GeneVariantFamily;

static GENE_VARIANT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][A-Z0-9]{1,7})\b[^\n]{0,40}?\b([A-Z]\d{1,5}[A-Z]|[ACGT]/[ACGT]|[ACGT]{2})\b")
        .expect("static pattern")
});

impl PatternFamily for GeneVariantFamily {
    fn id(&self) -> &'static str {
        "genetic/gene-variant"
    }

    fn document_type(&self) -> DocumentType {
        DocumentType::Genetic
    }

    fn scan(&self, text: &str) -> Vec<Candidate> {
        GENE_VARIANT_RE
            .captures_iter(text)
            .filter_map(|caps| {
                let gene = caps.get(1)?;
                if !is_plausible_gene_symbol(gene.as_str()) {
                    return None;
                }
                // Whole span, so the attached genotype/mutation travels with
                // the candidate
                let span = caps.get(0)?;
                Some(Candidate::new(
                    span.as_str(),
                    CandidateKind::Variant,
                    gene.start(),
                    self.id(),
                ))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// All registered families, in priority order: within a document type, more
/// specific families come first so their spans win first-seen dedup.
static REGISTRY: LazyLock<Vec<Box<dyn PatternFamily>>> = LazyLock::new(|| {
    vec![
        Box::new(ValueUnitFamily),
        Box::new(RangeLineFamily),
        Box::new(ColonPairFamily),
        Box::new(TableRowFamily),
        Box::new(RsidFamily),
        Box::new(GeneVariantFamily),
    ]
});

/// Families applicable to the given document type, in priority order.
pub fn families_for(doc_type: DocumentType) -> Vec<&'static dyn PatternFamily> {
    REGISTRY
        .iter()
        .filter(|f| f.document_type() == doc_type)
        .map(std::convert::AsRef::as_ref)
        .collect()
}
