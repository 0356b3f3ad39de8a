//! Core data types for parsed documents, biomarker readings, and variant
//! observations.

pub mod biomarker;
pub mod document;
pub mod types;
pub mod variant;
