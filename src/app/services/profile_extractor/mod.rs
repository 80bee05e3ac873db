//! Profile extraction module
//!
//! This module implements the profile-to-row normalization pipeline: it
//! turns one opened profile container into a stream of per-level
//! measurement rows, tolerating the structural variance found across real
//! Argo archives (single-profile vs. multi-profile layouts, inconsistent
//! variable name casing and aliasing, heterogeneous missing-value
//! encodings) without corrupting or duplicating data.
//!
//! # Architecture
//!
//! The module is organized into logical components, in dependency order:
//! - [`variables`] - role-to-variable-name resolution across alias lists
//! - [`values`] - scalar/array normalization and the missing-value guard
//! - [`platform`] - platform identifier decoding with filename fallback
//! - [`time`] - reference time + day offset -> absolute timestamp
//! - [`filter`] - whole-profile accept/reject decisions
//! - [`emitter`] - per-level row emission
//! - [`extractor`] - per-file orchestration of the above
//! - [`stats`] - skip accounting and summaries
//!
//! # Processing pipeline
//!
//! For each file, the resolver runs once; then for each profile index the
//! normalizer extracts scalars and level sequences, the identity decoder
//! and time resolver produce identity and timestamp, the filter accepts
//! or rejects the profile as a whole, and the emitter walks pressure
//! levels pushing rows to the sink. Every rejection is locally recovered
//! and counted; nothing in this module is fatal to a batch.

pub mod emitter;
pub mod extractor;
pub mod filter;
pub mod platform;
pub mod stats;
pub mod time;
pub mod values;
pub mod variables;

#[cfg(test)]
mod tests;

pub use extractor::ProfileExtractor;
pub use stats::{ExtractionStats, FileStats};
pub use variables::VariableMap;
