//! The extraction engine: classification, candidate generation, context
//! windows, structuring, confidence scoring, and deduplication.
//!
//! The entry point is [`pipeline::parse`]. Flow:
//!
//! ```text
//! raw text -> classifier -> {pattern families} -> context windows
//!          -> structurer -> confidence scorer -> deduplicator -> ParsedDocument
//! ```
//!
//! Several structurally different pattern families scan the same text
//! unconditionally; recall comes from that redundancy, reconciled by the
//! deduplicator, not from any single "perfect" pattern.

pub mod classifier;
pub mod confidence;
pub mod context;
pub mod dedup;
pub mod pipeline;
pub mod structurer;
