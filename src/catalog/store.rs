use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::types::SnpId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// A product-supported SNP the system can interpret downstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedSnp {
    pub id: SnpId,

    /// Canonical dbSNP identifier, lowercase
    pub rsid: String,

    /// Gene symbol, uppercase
    pub gene: String,

    /// Human-readable name (e.g. "MTHFR C677T")
    pub display_name: String,

    /// Alternate spellings seen in vendor reports, lowercase
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub snps: Vec<SupportedSnp>,
}

/// The supported-SNP catalog with lookup indexes
#[derive(Debug)]
pub struct SnpCatalog {
    /// All supported SNPs, in catalog order
    pub snps: Vec<SupportedSnp>,

    /// Index: SNP id -> index in snps vec
    id_to_index: HashMap<SnpId, usize>,

    /// Index: normalized rsid -> indices (a custom catalog may list one rsid
    /// under more than one gene entry, e.g. the lactase-persistence SNP
    /// reported as either LCT or MCM6)
    rsid_to_indices: HashMap<String, Vec<usize>>,

    /// Index: gene symbol -> indices (a gene can carry several supported SNPs)
    gene_to_indices: HashMap<String, Vec<usize>>,

    /// Index: (normalized rsid, gene symbol) -> index
    rsid_gene_to_index: HashMap<(String, String), usize>,
}

/// Normalize an rsID for lookup: trimmed, lowercased, "rs" prefix ensured for
/// bare numeric identifiers.
#[must_use]
pub fn normalize_rsid(rsid: &str) -> String {
    let lowered = rsid.trim().to_lowercase();
    if !lowered.is_empty() && lowered.chars().all(|c| c.is_ascii_digit()) {
        format!("rs{lowered}")
    } else {
        lowered
    }
}

/// Normalize a gene symbol for lookup: trimmed, uppercased.
#[must_use]
pub fn normalize_gene(gene: &str) -> String {
    gene.trim().to_uppercase()
}

impl SnpCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            snps: Vec::new(),
            id_to_index: HashMap::new(),
            rsid_to_indices: HashMap::new(),
            gene_to_indices: HashMap::new(),
            rsid_gene_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the embedded JSON is invalid
    /// (validated at build time, so this indicates a build problem).
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/supported_snps.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read or
    /// `CatalogError::ParseError` if it is not valid catalog JSON.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON does not match the
    /// catalog schema.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for snp in data.snps {
            catalog.add_snp(snp);
        }

        Ok(catalog)
    }

    /// Add a SNP to the catalog, updating all indexes
    pub fn add_snp(&mut self, snp: SupportedSnp) {
        let index = self.snps.len();
        let rsid = normalize_rsid(&snp.rsid);
        let gene = normalize_gene(&snp.gene);

        self.id_to_index.insert(snp.id.clone(), index);
        self.rsid_to_indices.entry(rsid.clone()).or_default().push(index);
        self.gene_to_indices.entry(gene.clone()).or_default().push(index);
        self.rsid_gene_to_index.insert((rsid, gene), index);

        self.snps.push(snp);
    }

    /// Get a SNP by catalog id
    #[must_use]
    pub fn get(&self, id: &SnpId) -> Option<&SupportedSnp> {
        self.id_to_index.get(id).map(|&idx| &self.snps[idx])
    }

    /// Lookup by normalized rsID, only when the rsid maps to exactly one
    /// supported SNP; an ambiguous rsid is not a match.
    #[must_use]
    pub fn find_by_rsid_unique(&self, rsid: &str) -> Option<&SupportedSnp> {
        match self.rsid_to_indices.get(&normalize_rsid(rsid)) {
            Some(indices) if indices.len() == 1 => Some(&self.snps[indices[0]]),
            _ => None,
        }
    }

    /// Lookup by gene symbol, only when the gene maps to exactly one
    /// supported SNP; an ambiguous gene is not a match.
    #[must_use]
    pub fn find_by_gene_unique(&self, gene: &str) -> Option<&SupportedSnp> {
        match self.gene_to_indices.get(&normalize_gene(gene)) {
            Some(indices) if indices.len() == 1 => Some(&self.snps[indices[0]]),
            _ => None,
        }
    }

    /// Exact lookup by combined (rsid, gene) key
    #[must_use]
    pub fn find_by_rsid_gene(&self, rsid: &str, gene: &str) -> Option<&SupportedSnp> {
        self.rsid_gene_to_index
            .get(&(normalize_rsid(rsid), normalize_gene(gene)))
            .map(|&idx| &self.snps[idx])
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            snps: self.snps.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of supported SNPs
    #[must_use]
    pub fn len(&self) -> usize {
        self.snps.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snps.is_empty()
    }
}

impl Default for SnpCatalog {
    fn default() -> Self {
        Self::new()
    }
}
