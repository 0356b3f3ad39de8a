//! Supported-SNP catalog storage and canonical matching.
//!
//! The catalog is the fixed, product-supported list of SNPs the system can
//! interpret downstream. Extracted variants are reconciled against it by
//! [`matcher::SnpMatcher`]; anything unmatched is kept with its raw
//! rsid/gene text rather than discarded.

pub mod matcher;
pub mod store;
