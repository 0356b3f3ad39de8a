use serde::{Deserialize, Serialize};

/// Genotype value used when no allele pair or zygosity word was recovered
pub const UNKNOWN_GENOTYPE: &str = "unknown";

/// A genetic variant observation recovered from report text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRecord {
    /// dbSNP reference identifier, lowercased (e.g. "rs1801133")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsid: Option<String>,

    /// Gene symbol, uppercased (e.g. "MTHFR")
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "gene_name")]
    pub gene: Option<String>,

    /// Observed genotype: an allele pair ("CT"), a zygosity word, or "unknown"
    pub genotype: String,

    /// Point-mutation notation if printed (e.g. "C677T")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<String>,

    /// Extraction confidence in [0, 1]
    pub confidence: f64,

    /// Word window the record was structured from; kept for diagnostics only
    #[serde(skip)]
    pub context: String,
}

impl VariantRecord {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rsid: None,
            gene: None,
            genotype: UNKNOWN_GENOTYPE.to_string(),
            mutation: None,
            confidence: 0.0,
            context: String::new(),
        }
    }

    #[must_use]
    pub fn with_rsid(mut self, rsid: impl Into<String>) -> Self {
        self.rsid = Some(rsid.into().to_lowercase());
        self
    }

    #[must_use]
    pub fn with_gene(mut self, gene: impl Into<String>) -> Self {
        self.gene = Some(gene.into().to_uppercase());
        self
    }

    #[must_use]
    pub fn with_genotype(mut self, genotype: impl Into<String>) -> Self {
        self.genotype = genotype.into();
        self
    }

    #[must_use]
    pub fn with_mutation(mut self, mutation: impl Into<String>) -> Self {
        self.mutation = Some(mutation.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// A record is matchable when it carries at least one of an rsID, a gene
    /// symbol, or a resolved genotype. The structurer never emits records
    /// that fail this check.
    #[must_use]
    pub fn is_matchable(&self) -> bool {
        self.rsid.is_some() || self.gene.is_some() || self.genotype != UNKNOWN_GENOTYPE
    }

    /// Key on which independently recovered duplicates collapse:
    /// (rsid or gene, genotype, mutation).
    #[must_use]
    pub fn dedup_key(&self) -> (String, String, String) {
        let identity = self
            .rsid
            .clone()
            .or_else(|| self.gene.as_ref().map(|g| g.to_lowercase()))
            .unwrap_or_default();
        (
            identity,
            self.genotype.to_lowercase(),
            self.mutation.clone().unwrap_or_default().to_lowercase(),
        )
    }
}

impl Default for VariantRecord {
    fn default() -> Self {
        Self::new()
    }
}
