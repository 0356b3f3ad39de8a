use serde::{Deserialize, Serialize};

/// Unique identifier for a supported SNP in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnpId(pub String);

impl SnpId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for SnpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of lab report a document was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Genetic test report (SNPs, genotypes, zygosity)
    Genetic,
    /// Blood panel report (analytes, concentrations, reference ranges)
    Blood,
    /// Neither indicator set scored above threshold
    Unknown,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Genetic => write!(f, "genetic"),
            Self::Blood => write!(f, "blood"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Status flag attached to a biomarker reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomarkerStatus {
    Normal,
    High,
    Low,
    Critical,
}

impl BiomarkerStatus {
    /// Map a status word found near a reading to a flag.
    /// Returns None for words that don't describe a result status.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "normal" | "within" | "wnl" => Some(Self::Normal),
            "high" | "elevated" | "increased" | "above" => Some(Self::High),
            "low" | "decreased" | "reduced" | "below" => Some(Self::Low),
            "critical" | "panic" | "alert" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for BiomarkerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
            Self::Low => write!(f, "low"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Which cascade stage matched a variant against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    /// Exact rsID match, case/prefix normalized
    Rsid,
    /// Exact gene symbol match (unambiguous in catalog)
    Gene,
    /// Combined rsID + gene key
    RsidGene,
    /// Alternate-spelling table or substring heuristic
    Alias,
    /// No catalog entry; record kept as pass-through
    Unmatched,
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rsid => write!(f, "rsid"),
            Self::Gene => write!(f, "gene"),
            Self::RsidGene => write!(f, "rsid+gene"),
            Self::Alias => write!(f, "alias"),
            Self::Unmatched => write!(f, "unmatched"),
        }
    }
}

/// Confidence level for a parsed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
