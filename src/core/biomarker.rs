use serde::{Deserialize, Serialize};

use crate::core::types::BiomarkerStatus;

/// A quantified lab measurement recovered from report text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomarkerRecord {
    /// Analyte name as printed in the report (blocklist-gated free text)
    pub name: String,

    /// Measured value; always numeric
    pub value: f64,

    /// Measurement unit as printed; may be empty when none was recognized
    pub unit: String,

    /// Reference range as printed (e.g. "20-50"), if one accompanied the reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>,

    /// Status flag inferred from nearby status words
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BiomarkerStatus>,

    /// Extraction confidence in [0, 1]
    pub confidence: f64,

    /// Word window the record was structured from; kept for diagnostics only
    #[serde(skip)]
    pub context: String,
}

impl BiomarkerRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            reference_range: None,
            status: None,
            confidence: 0.0,
            context: String::new(),
        }
    }

    #[must_use]
    pub fn with_reference_range(mut self, range: impl Into<String>) -> Self {
        self.reference_range = Some(range.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: BiomarkerStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Name normalized for deduplication: lowercased, whitespace collapsed,
    /// surrounding punctuation stripped.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Key on which independently recovered duplicates collapse.
    ///
    /// Values come from the same printed text, so bit-equality is the
    /// equality that matters; no epsilon comparison.
    #[must_use]
    pub fn dedup_key(&self) -> (String, u64) {
        (self.normalized_name(), self.value.to_bits())
    }
}

/// Normalize an analyte name for comparison across extraction strategies.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim_matches(|c: char| !c.is_alphanumeric())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
