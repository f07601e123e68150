//! Shared movie-awards lookup domain primitives.
//!
//! This crate owns the request-parameter contract, the typed award record,
//! and lookup outcome classification. It intentionally excludes AWS SDK and
//! Lambda runtime concerns.

pub mod contract;
pub mod lookup;
