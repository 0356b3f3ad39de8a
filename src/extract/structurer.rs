//! Structurer: turns a (candidate, context window) pair into a typed record,
//! or rejects it.
//!
//! Rejections are silent by design; a candidate that fails plausibility is
//! dropped without surfacing an error (at most a debug trace).

use tracing::debug;

use crate::core::biomarker::BiomarkerRecord;
use crate::core::types::BiomarkerStatus;
use crate::core::variant::VariantRecord;
use crate::extract::confidence;
use crate::extract::context::ContextWindow;
use crate::patterns::blocklist::{is_plausible_biomarker_name, is_plausible_gene_symbol};
use crate::patterns::units::NUMBER_UNIT_RE;
use crate::patterns::{
    Candidate, CandidateKind, GENE_SYMBOL_RE, GENOTYPE_RE, MUTATION_RE, NUMBER_RE, REF_RANGE_RE,
    RSID_RE, STATUS_WORD_RE, ZYGOSITY_RE,
};

/// A record produced by structuring one candidate
#[derive(Debug, Clone)]
pub enum ExtractedRecord {
    Biomarker(BiomarkerRecord),
    Variant(VariantRecord),
}

/// Structure a candidate against its context window.
///
/// Returns None when the candidate fails plausibility checks or the context
/// lacks the minimum signal (numeric value for biomarkers; identity or
/// genotype for variants).
#[must_use]
pub fn structure(candidate: &Candidate, context: &ContextWindow) -> Option<ExtractedRecord> {
    match candidate.kind {
        CandidateKind::Biomarker => {
            structure_biomarker(candidate, context).map(ExtractedRecord::Biomarker)
        }
        CandidateKind::Variant => {
            structure_variant(candidate, context).map(ExtractedRecord::Variant)
        }
    }
}

// ---------------------------------------------------------------------------
// Biomarkers
// ---------------------------------------------------------------------------

fn structure_biomarker(candidate: &Candidate, context: &ContextWindow) -> Option<BiomarkerRecord> {
    let name = candidate
        .text
        .trim_matches(|c: char| !c.is_alphanumeric() && c != ')' && c != '(')
        .to_string();

    if !is_plausible_biomarker_name(&name) {
        debug!(candidate = %candidate.text, pattern = candidate.pattern, "rejected implausible name");
        return None;
    }

    // A reading's value, range, and status follow its name on its own printed
    // row in every supported layout, so searches run from the anchor to the
    // end of the anchor's line; words outside that span belong to neighboring
    // rows. Locate the reference range first so its numbers are not mistaken
    // for the measured value.
    let on_row = |start: usize| start >= context.anchor && start < context.line_end;

    let range = REF_RANGE_RE
        .captures_iter(&context.text)
        .filter_map(|caps| caps.get(1))
        .find(|m| on_row(m.start()));
    let range_span = range.as_ref().map(|m| (m.start(), m.end()));
    let reference_range = range
        .as_ref()
        .map(|m| m.as_str().split_whitespace().collect::<String>());

    let (value, unit) = find_value_and_unit(context, range_span)?;

    let status = STATUS_WORD_RE
        .find_iter(&context.text)
        .find(|m| on_row(m.start()))
        .and_then(|m| BiomarkerStatus::from_word(m.as_str()));

    let mut record = BiomarkerRecord::new(name, value, unit).with_context(context.text.clone());
    if let Some(range) = reference_range {
        record = record.with_reference_range(range);
    }
    if let Some(status) = status {
        record = record.with_status(status);
    }
    record.confidence = confidence::score_biomarker(&record);

    Some(record)
}

/// Find the measured value on the anchor's row: prefer a number adjacent to
/// a recognized unit, falling back to the first free-standing number.
/// Numbers inside the reference range span are never the value.
fn find_value_and_unit(
    context: &ContextWindow,
    range_span: Option<(usize, usize)>,
) -> Option<(f64, String)> {
    let eligible = |start: usize| {
        start >= context.anchor
            && start < context.line_end
            && !range_span.is_some_and(|(lo, hi)| start >= lo && start < hi)
            && starts_cleanly(&context.text, start)
    };

    for caps in NUMBER_UNIT_RE.captures_iter(&context.text) {
        let number = caps.get(1)?;
        if !eligible(number.start()) {
            continue;
        }
        if let Ok(value) = number.as_str().parse::<f64>() {
            let unit = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
            return Some((value, unit));
        }
    }

    for m in NUMBER_RE.find_iter(&context.text) {
        if !eligible(m.start()) {
            continue;
        }
        if let Ok(value) = m.as_str().parse::<f64>() {
            return Some((value, String::new()));
        }
    }

    None
}

/// A numeric token "starts cleanly" when it is not the tail of an
/// alphanumeric word (the 12 in "B12" is not a value).
fn starts_cleanly(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// Maximum char distance from the anchor at which a context token still
/// counts as attached to this variant. Multi-variant panels put one call per
/// row; anything farther belongs to a neighboring row.
const VARIANT_FIELD_MAX_DISTANCE: usize = 40;

/// Direction preference when resolving a variant field from context.
/// Vendor rows lead with the identity (gene, mutation) and trail with the
/// call (genotype), so searches are biased accordingly.
#[derive(Clone, Copy)]
enum FieldBias {
    /// Prefer occurrences before the anchor (gene symbols, mutations)
    Leading,
    /// Prefer occurrences after the anchor (genotype calls)
    Trailing,
    /// No preference (rsIDs)
    Either,
}

fn structure_variant(candidate: &Candidate, context: &ContextWindow) -> Option<VariantRecord> {
    // Tokens inside the candidate span are directly attached and always win;
    // context search fills in the rest.
    let rsid = RSID_RE
        .find(&candidate.text)
        .or_else(|| nearest_match(&RSID_RE, context, FieldBias::Either))
        .map(|m| m.as_str().to_lowercase());

    let gene = find_gene(candidate, context);

    let genotype = GENOTYPE_RE
        .find(&candidate.text)
        .or_else(|| nearest_match(&GENOTYPE_RE, context, FieldBias::Trailing))
        .map(|m| m.as_str().replace('/', ""))
        .or_else(|| {
            // Zygosity word as genotype fallback
            nearest_match(&ZYGOSITY_RE, context, FieldBias::Trailing)
                .map(|m| m.as_str().to_lowercase())
        });

    let mutation = MUTATION_RE
        .find(&candidate.text)
        .or_else(|| nearest_match(&MUTATION_RE, context, FieldBias::Leading))
        .map(|m| m.as_str().to_string());

    // Matchability gate: an identity (rsid or gene) or a resolved genotype
    if rsid.is_none() && gene.is_none() && genotype.is_none() {
        debug!(candidate = %candidate.text, pattern = candidate.pattern, "rejected unmatchable variant");
        return None;
    }

    let mut record = VariantRecord::new().with_context(context.text.clone());
    if let Some(rsid) = rsid {
        record = record.with_rsid(rsid);
    }
    if let Some(gene) = gene {
        record = record.with_gene(gene);
    }
    if let Some(genotype) = genotype {
        record = record.with_genotype(genotype);
    }
    if let Some(mutation) = mutation {
        record = record.with_mutation(mutation);
    }
    record.confidence = confidence::score_variant(&record);

    Some(record)
}

/// Biased distance from a match to the anchor: matches in the dispreferred
/// direction count double, and anything beyond the attachment cap is out.
fn biased_distance(start: usize, anchor: usize, bias: FieldBias) -> Option<usize> {
    let raw = start.abs_diff(anchor);
    if raw > VARIANT_FIELD_MAX_DISTANCE {
        return None;
    }
    let penalized = match (bias, start >= anchor) {
        (FieldBias::Leading, true) | (FieldBias::Trailing, false) => raw * 2,
        _ => raw,
    };
    Some(penalized)
}

/// The eligible regex match nearest the window's anchor under the bias.
fn nearest_match<'t>(
    re: &regex::Regex,
    context: &'t ContextWindow,
    bias: FieldBias,
) -> Option<regex::Match<'t>> {
    re.find_iter(&context.text)
        .filter_map(|m| biased_distance(m.start(), context.anchor, bias).map(|d| (d, m)))
        .min_by_key(|&(d, _)| d)
        .map(|(_, m)| m)
}

/// The gene is a plausible symbol inside the candidate span when present;
/// otherwise the plausible symbol nearest the anchor, leading-biased. Allele
/// pairs satisfy the symbol shape, so genotype-shaped tokens are excluded.
fn find_gene(candidate: &Candidate, context: &ContextWindow) -> Option<String> {
    if let Some(symbol) = GENE_SYMBOL_RE
        .find_iter(&candidate.text)
        .map(|m| m.as_str())
        .find(|s| is_plausible_gene_symbol(s) && !GENOTYPE_RE.is_match(s))
    {
        return Some(symbol.to_string());
    }

    GENE_SYMBOL_RE
        .find_iter(&context.text)
        .filter(|m| is_plausible_gene_symbol(m.as_str()) && !GENOTYPE_RE.is_match(m.as_str()))
        .filter_map(|m| {
            biased_distance(m.start(), context.anchor, FieldBias::Leading).map(|d| (d, m))
        })
        .min_by_key(|&(d, _)| d)
        .map(|(_, m)| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::context;

    fn biomarker_candidate(name: &str) -> Candidate {
        Candidate::new(name, CandidateKind::Biomarker, 0, "blood/value-unit")
    }

    fn variant_candidate(text: &str) -> Candidate {
        Candidate::new(text, CandidateKind::Variant, 0, "genetic/rsid")
    }

    fn window(text: &str) -> ContextWindow {
        context::extract(text, 0, context::DEFAULT_WORD_RADIUS)
    }

    #[test]
    fn test_full_biomarker_line() {
        let ctx = window("Vitamin D: 25 ng/mL (Normal: 20-50)");
        let record = structure(&biomarker_candidate("Vitamin D"), &ctx);
        let Some(ExtractedRecord::Biomarker(b)) = record else {
            panic!("expected biomarker record");
        };
        assert_eq!(b.name, "Vitamin D");
        assert_eq!(b.value, 25.0);
        assert_eq!(b.unit, "ng/mL");
        assert_eq!(b.reference_range.as_deref(), Some("20-50"));
        assert_eq!(b.status, Some(BiomarkerStatus::Normal));
    }

    #[test]
    fn test_within_normal_limits_flags_normal() {
        let ctx = window("Glucose: 90 mg/dL within normal limits");
        let Some(ExtractedRecord::Biomarker(b)) = structure(&biomarker_candidate("Glucose"), &ctx)
        else {
            panic!("expected biomarker record");
        };
        assert_eq!(b.status, Some(BiomarkerStatus::Normal));
    }

    #[test]
    fn test_blocklisted_name_rejected() {
        let ctx = window("Page 2 of 5");
        assert!(structure(&biomarker_candidate("Page"), &ctx).is_none());
    }

    #[test]
    fn test_no_numeric_value_no_record() {
        let ctx = window("Glucose result pending, see note");
        assert!(structure(&biomarker_candidate("Glucose"), &ctx).is_none());
    }

    #[test]
    fn test_range_numbers_not_taken_as_value() {
        // Value appears after the range qualifier in some vendor layouts
        let ctx = window("TSH (Reference range: 0.4-4.0) measured at 2.1 mIU/L");
        let Some(ExtractedRecord::Biomarker(b)) =
            structure(&biomarker_candidate("TSH"), &ctx)
        else {
            panic!("expected biomarker record");
        };
        assert_eq!(b.value, 2.1);
        assert_eq!(b.reference_range.as_deref(), Some("0.4-4.0"));
    }

    #[test]
    fn test_status_on_next_row_not_attached() {
        // The flag belongs to the Ferritin row, not the unflagged TSH row
        let ctx = window("TSH: 2.1 mIU/L\nFerritin: 12 ng/mL Low");
        let Some(ExtractedRecord::Biomarker(b)) = structure(&biomarker_candidate("TSH"), &ctx)
        else {
            panic!("expected biomarker record");
        };
        assert_eq!(b.value, 2.1);
        assert_eq!(b.status, None);
    }

    #[test]
    fn test_range_on_next_row_not_attached() {
        let ctx = window("Ferritin: 12 ng/mL\nGlucose: 90 mg/dL (Normal: 70-99)");
        let Some(ExtractedRecord::Biomarker(b)) =
            structure(&biomarker_candidate("Ferritin"), &ctx)
        else {
            panic!("expected biomarker record");
        };
        assert_eq!(b.value, 12.0);
        assert_eq!(b.reference_range, None);
    }

    #[test]
    fn test_embedded_digits_not_a_value() {
        let ctx = window("Vitamin B12 deficient, recheck advised 450 pg/mL");
        let Some(ExtractedRecord::Biomarker(b)) =
            structure(&biomarker_candidate("Vitamin B12"), &ctx)
        else {
            panic!("expected biomarker record");
        };
        assert_eq!(b.value, 450.0);
    }

    #[test]
    fn test_variant_from_rsid_context() {
        let ctx = window("MTHFR C677T rs1801133 genotype CT heterozygous");
        let Some(ExtractedRecord::Variant(v)) = structure(&variant_candidate("rs1801133"), &ctx)
        else {
            panic!("expected variant record");
        };
        assert_eq!(v.rsid.as_deref(), Some("rs1801133"));
        assert_eq!(v.gene.as_deref(), Some("MTHFR"));
        assert_eq!(v.genotype, "CT");
        assert_eq!(v.mutation.as_deref(), Some("C677T"));
    }

    #[test]
    fn test_zygosity_fallback_genotype() {
        let ctx = window("APOE variant homozygous for the risk allele");
        let Some(ExtractedRecord::Variant(v)) = structure(&variant_candidate("APOE"), &ctx)
        else {
            panic!("expected variant record");
        };
        assert_eq!(v.gene.as_deref(), Some("APOE"));
        assert_eq!(v.genotype, "homozygous");
    }

    #[test]
    fn test_slash_genotype_normalized() {
        let ctx = window("rs4680 result C/T");
        let Some(ExtractedRecord::Variant(v)) = structure(&variant_candidate("rs4680"), &ctx)
        else {
            panic!("expected variant record");
        };
        assert_eq!(v.genotype, "CT");
    }

    #[test]
    fn test_unmatchable_variant_rejected() {
        let ctx = window("no identifiers anywhere near this span");
        assert!(structure(&variant_candidate("xyz"), &ctx).is_none());
    }
}
