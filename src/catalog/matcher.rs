//! Canonical matcher: reconciles extracted variants against the
//! supported-SNP catalog.
//!
//! Cascaded stages, each attempted only on prior failure:
//!
//! 1. exact rsID, case/prefix normalized, only when the rsid is unambiguous
//!    in the catalog
//! 2. exact gene symbol, only when unambiguous in the catalog
//! 3. combined rsID + gene key, resolving rsids or genes the catalog lists
//!    more than once
//! 4. alternate-spelling table plus substring heuristics
//!
//! Unmatched records are kept as pass-throughs with their raw rsid/gene
//! text, never discarded, so later reconciliation stays possible.

use serde::Serialize;
use tracing::debug;

use crate::catalog::store::{normalize_rsid, SnpCatalog, SupportedSnp};
use crate::core::types::{MatchStage, SnpId};
use crate::core::variant::VariantRecord;

/// A variant record tagged with its catalog reconciliation outcome.
///
/// Serializes to the persistence contract: either `supported_snp_id` is set,
/// or the raw `rsid`/`gene_name` fields on the flattened record identify
/// the row for the idempotent upsert.
#[derive(Debug, Clone, Serialize)]
pub struct VariantMatch {
    #[serde(flatten)]
    pub record: VariantRecord,

    /// Matched catalog entry, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_snp_id: Option<SnpId>,

    /// Which cascade stage produced the match
    pub stage: MatchStage,
}

impl VariantMatch {
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.supported_snp_id.is_some()
    }
}

/// Matches variant records against a supported-SNP catalog
pub struct SnpMatcher<'a> {
    catalog: &'a SnpCatalog,
}

impl<'a> SnpMatcher<'a> {
    #[must_use]
    pub fn new(catalog: &'a SnpCatalog) -> Self {
        Self { catalog }
    }

    /// Run the cascade for one record.
    #[must_use]
    pub fn match_record(&self, record: &VariantRecord) -> VariantMatch {
        let matched = self
            .match_by_rsid(record)
            .or_else(|| self.match_by_gene(record))
            .or_else(|| self.match_by_rsid_gene(record))
            .or_else(|| self.match_by_alias(record));

        match matched {
            Some((snp, stage)) => {
                debug!(rsid = ?record.rsid, gene = ?record.gene, %stage, snp = %snp.id, "variant matched");
                VariantMatch {
                    record: record.clone(),
                    supported_snp_id: Some(snp.id.clone()),
                    stage,
                }
            }
            None => {
                debug!(rsid = ?record.rsid, gene = ?record.gene, "variant unmatched, kept as pass-through");
                VariantMatch {
                    record: record.clone(),
                    supported_snp_id: None,
                    stage: MatchStage::Unmatched,
                }
            }
        }
    }

    /// Run the cascade over a whole record list, preserving order.
    #[must_use]
    pub fn match_all(&self, records: &[VariantRecord]) -> Vec<VariantMatch> {
        records.iter().map(|r| self.match_record(r)).collect()
    }

    fn match_by_rsid(&self, record: &VariantRecord) -> Option<(&'a SupportedSnp, MatchStage)> {
        let rsid = record.rsid.as_deref()?;
        self.catalog
            .find_by_rsid_unique(rsid)
            .map(|snp| (snp, MatchStage::Rsid))
    }

    fn match_by_gene(&self, record: &VariantRecord) -> Option<(&'a SupportedSnp, MatchStage)> {
        let gene = record.gene.as_deref()?;
        self.catalog
            .find_by_gene_unique(gene)
            .map(|snp| (snp, MatchStage::Gene))
    }

    fn match_by_rsid_gene(&self, record: &VariantRecord) -> Option<(&'a SupportedSnp, MatchStage)> {
        let rsid = record.rsid.as_deref()?;
        let gene = record.gene.as_deref()?;
        self.catalog
            .find_by_rsid_gene(rsid, gene)
            .map(|snp| (snp, MatchStage::RsidGene))
    }

    /// Last resort: alternate spellings and substring heuristics over the
    /// record's combined rsid+gene+mutation text.
    fn match_by_alias(&self, record: &VariantRecord) -> Option<(&'a SupportedSnp, MatchStage)> {
        let combined = combined_identity_text(record);
        if combined.is_empty() {
            return None;
        }

        for snp in &self.catalog.snps {
            let alias_hit = snp
                .aliases
                .iter()
                .any(|alias| !alias.is_empty() && combined.contains(alias.as_str()));
            let display_hit = combined.contains(&snp.display_name.to_lowercase());
            // Bare gene substrings are deliberately NOT a hit here; an
            // ambiguous gene must be resolved by an alias or mutation
            let rsid_hit = combined.contains(&normalize_rsid(&snp.rsid));

            if alias_hit || display_hit || rsid_hit {
                return Some((snp, MatchStage::Alias));
            }
        }

        None
    }
}

/// Lowercased, space-padded concatenation of a record's identity fields,
/// used by the substring heuristics.
fn combined_identity_text(record: &VariantRecord) -> String {
    let mut parts = Vec::new();
    if let Some(rsid) = &record.rsid {
        parts.push(rsid.to_lowercase());
    }
    if let Some(gene) = &record.gene {
        parts.push(gene.to_lowercase());
    }
    if let Some(mutation) = &record.mutation {
        parts.push(mutation.to_lowercase());
    }
    if parts.is_empty() {
        return String::new();
    }
    format!(" {} ", parts.join(" "))
}
