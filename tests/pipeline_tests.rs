//! End-to-end extraction tests over realistic report text.
//!
//! These run the full pipeline through the public API: classification,
//! candidate scanning, structuring, scoring, dedup, and catalog
//! reconciliation.

use report_parser::{
    parse, parse_with_radius, BiomarkerStatus, DocumentType, MatchStage, SnpCatalog, SnpMatcher,
};

const BLOOD_REPORT: &str = "\
QUEST DIAGNOSTICS    LABORATORY REPORT    Page 1 of 2
Patient collected: 02/11/2026    Specimen: serum

Vitamin D: 25 ng/mL (Normal: 20-50)
Glucose: 90 mg/dL (Reference range: 70-99)
TSH: 2.1 mIU/L
Ferritin: 12 ng/mL Low
Hemoglobin    13.5    g/dL
";

const GENETIC_REPORT: &str = "\
GENETIC TEST RESULTS
Methylation variant panel, genotype calls listed per variant below.

MTHFR C677T rs1801133 genotype CT heterozygous
MTHFR A1298C rs1801131 genotype AA homozygous
COMT V158M rs4680 genotype GG
APOE rs429358 TT
";

#[test]
fn blood_report_yields_flagged_readings() {
    let doc = parse(BLOOD_REPORT);
    assert_eq!(doc.document_type, DocumentType::Blood);
    assert!(doc.error.is_none());
    assert!(doc.variants.is_empty());

    let vitamin_d = doc
        .biomarkers
        .iter()
        .find(|b| b.name == "Vitamin D")
        .expect("vitamin d reading");
    assert_eq!(vitamin_d.value, 25.0);
    assert_eq!(vitamin_d.unit, "ng/mL");
    assert_eq!(vitamin_d.reference_range.as_deref(), Some("20-50"));

    let ferritin = doc
        .biomarkers
        .iter()
        .find(|b| b.name == "Ferritin")
        .expect("ferritin reading");
    assert_eq!(ferritin.status, Some(BiomarkerStatus::Low));

    // Whitespace table row, no colon
    assert!(doc.biomarkers.iter().any(|b| b.name == "Hemoglobin"));
}

#[test]
fn status_and_range_stay_on_their_own_row() {
    // TSH carries no flag or range; the "Low" on the Ferritin row below it
    // must not leak upward through the context window
    let doc = parse(BLOOD_REPORT);

    let tsh = doc
        .biomarkers
        .iter()
        .find(|b| b.name == "TSH")
        .expect("tsh reading");
    assert_eq!(tsh.status, None);
    assert_eq!(tsh.reference_range, None);

    let ferritin = doc
        .biomarkers
        .iter()
        .find(|b| b.name == "Ferritin")
        .expect("ferritin reading");
    assert_eq!(ferritin.status, Some(BiomarkerStatus::Low));
}

#[test]
fn report_scaffolding_is_not_a_biomarker() {
    // "Page 1 of 2" and "Patient collected: 02/11/2026" both carry numbers
    let doc = parse(BLOOD_REPORT);
    for b in &doc.biomarkers {
        let name = b.normalized_name();
        assert!(!name.contains("page"), "page header extracted: {name}");
        assert!(!name.contains("patient"), "header row extracted: {name}");
    }
}

#[test]
fn genetic_report_yields_matchable_variants() {
    let doc = parse(GENETIC_REPORT);
    assert_eq!(doc.document_type, DocumentType::Genetic);
    assert!(doc.biomarkers.is_empty());

    let c677t = doc
        .variants
        .iter()
        .find(|v| v.rsid.as_deref() == Some("rs1801133"))
        .expect("rs1801133 extracted");
    assert_eq!(c677t.gene.as_deref(), Some("MTHFR"));
    assert_eq!(c677t.genotype, "CT");
    assert_eq!(c677t.mutation.as_deref(), Some("C677T"));

    for v in &doc.variants {
        assert!(v.is_matchable(), "unmatchable variant slipped through: {v:?}");
    }
}

#[test]
fn redundant_families_collapse_to_one_record_per_entity() {
    // rs1801133 is reachable through the rsid family and the gene-variant
    // family; it must survive as exactly one record
    let doc = parse(GENETIC_REPORT);
    let count = doc
        .variants
        .iter()
        .filter(|v| v.rsid.as_deref() == Some("rs1801133"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn unrelated_text_is_unknown_with_low_confidence() {
    let doc = parse("Quarterly planning notes. Attendees: operations, finance, support.");
    assert_eq!(doc.document_type, DocumentType::Unknown);
    assert!(doc.error.is_some());
    assert!(doc.biomarkers.is_empty() && doc.variants.is_empty());
    assert!(doc.confidence <= 0.1);
}

#[test]
fn parse_is_idempotent() {
    let first = serde_json::to_string(&parse(GENETIC_REPORT)).unwrap();
    let second = serde_json::to_string(&parse(GENETIC_REPORT)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn confidence_stays_in_unit_interval() {
    for text in [BLOOD_REPORT, GENETIC_REPORT, "", "rs1801133"] {
        let doc = parse(text);
        assert!((0.0..=1.0).contains(&doc.confidence));
        for b in &doc.biomarkers {
            assert!((0.0..=1.0).contains(&b.confidence));
        }
        for v in &doc.variants {
            assert!((0.0..=1.0).contains(&v.confidence));
        }
    }
}

#[test]
fn wider_radius_never_misclassifies() {
    for radius in [2, 10, 40] {
        let doc = parse_with_radius(BLOOD_REPORT, radius);
        assert_eq!(doc.document_type, DocumentType::Blood);
    }
}

#[test]
fn extracted_variants_reconcile_against_catalog() {
    let doc = parse(GENETIC_REPORT);
    let catalog = SnpCatalog::load_embedded().unwrap();
    let matcher = SnpMatcher::new(&catalog);

    let matches = matcher.match_all(&doc.variants);
    assert_eq!(matches.len(), doc.variants.len());

    let c677t = matches
        .iter()
        .find(|m| m.record.rsid.as_deref() == Some("rs1801133"))
        .unwrap();
    assert_eq!(c677t.stage, MatchStage::Rsid);
    assert_eq!(c677t.supported_snp_id.as_ref().unwrap().0, "mthfr_c677t");

    // rs429358 is in the catalog too
    assert!(matches
        .iter()
        .filter(|m| m.record.rsid.is_some())
        .all(|m| m.is_matched()));
}

#[test]
fn unmatched_variant_survives_reconciliation() {
    let doc = parse("Genotype panel: variant rs199999999 allele call GG, chromosome 7 snp");
    assert_eq!(doc.document_type, DocumentType::Genetic);

    let catalog = SnpCatalog::load_embedded().unwrap();
    let matcher = SnpMatcher::new(&catalog);
    let matches = matcher.match_all(&doc.variants);

    let novel = matches
        .iter()
        .find(|m| m.record.rsid.as_deref() == Some("rs199999999"))
        .expect("novel rsid kept");
    assert!(!novel.is_matched());
    assert_eq!(novel.stage, MatchStage::Unmatched);
}
