//! Structural blocklists gating free-text names.
//!
//! Biomarker names are open-ended free text, so plausibility is enforced
//! structurally (length, letters, blocklisted layout words) rather than
//! against a fixed analyte catalog.

/// Minimum plausible analyte name length
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum plausible analyte name length
pub const MAX_NAME_LENGTH: usize = 40;

/// Words that identify report scaffolding rather than analyte names.
/// Compared token-wise against the lowercased candidate name.
pub const NAME_BLOCKLIST: &[&str] = &[
    "page",
    "date",
    "doctor",
    "dr",
    "patient",
    "name",
    "see",
    "note",
    "notes",
    "comment",
    "comments",
    "lab",
    "laboratory",
    "specimen",
    "collected",
    "received",
    "reported",
    "ordered",
    "phone",
    "fax",
    "address",
    "dob",
    "mrn",
    "id",
    "accession",
    "report",
    "result",
    "results",
    "test",
    "tests",
    "units",
    "value",
    "flag",
    "range",
    "reference",
    "method",
    "final",
    "pending",
];

/// Uppercase tokens that satisfy the gene-symbol shape but are not genes:
/// abbreviations, panel names, and common blood analyte codes.
pub const GENE_WORD_BLOCKLIST: &[&str] = &[
    "DNA", "RNA", "PCR", "SNP", "THE", "AND", "FOR", "NOT", "ARE", "WAS", "LAB", "CBC", "CMP",
    "TSH", "WBC", "RBC", "HDL", "LDL", "BUN", "AST", "ALT", "GGT", "ALP", "MCV", "MCH", "MCHC",
    "RDW", "PLT", "BMI", "INR", "PSA", "CRP", "ESR", "A1C", "HGB", "HCT", "EGFR", "PAGE", "DATE",
    "HIGH", "LOW", "TEST", "NOTE", "FLAG", "UNIT", "REF", "POS", "NEG", "MRN", "DOB", "GENETIC",
    "RESULT", "RESULTS", "PANEL", "REPORT", "SERUM", "PLASMA", "RANGE", "FINAL",
];

/// Structural plausibility filter for biomarker names.
///
/// Rejects blocklisted layout terms, purely numeric strings, names outside
/// the length bounds, and strings with no letters.
#[must_use]
pub fn is_plausible_biomarker_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.len() < MIN_NAME_LENGTH || trimmed.len() > MAX_NAME_LENGTH {
        return false;
    }
    if !trimmed.chars().any(|c| c.is_alphabetic()) {
        return false;
    }

    let lowered = trimmed.to_lowercase();
    for token in lowered.split(|c: char| !c.is_alphanumeric()) {
        if !token.is_empty() && NAME_BLOCKLIST.contains(&token) {
            return false;
        }
    }

    true
}

/// Shape + blocklist filter for gene symbols: 2-8 uppercase alphanumerics
/// starting with a letter, at least two letters, not a known non-gene word,
/// and not point-mutation notation.
#[must_use]
pub fn is_plausible_gene_symbol(symbol: &str) -> bool {
    let s = symbol.trim();
    if s.len() < 2 || s.len() > 8 {
        return false;
    }
    let mut chars = s.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_uppercase() {
        return false;
    }
    if !s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return false;
    }
    if s.chars().filter(|c| c.is_ascii_uppercase()).count() < 2 {
        return false;
    }
    if GENE_WORD_BLOCKLIST.contains(&s) {
        return false;
    }
    // C677T and friends are mutations, not symbols
    if crate::patterns::MUTATION_RE.is_match(s) {
        return false;
    }

    true
}
