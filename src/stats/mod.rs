//! Per-shard extraction and cross-shard accumulation.
//!
//! The pipeline runs one direction: a shard's token stream feeds a
//! [`FieldExtractor`], which fills one [`Histogram`]; the driver merges
//! per-shard histograms into a cumulative one; [`SalarySummary`] is
//! recomputed exactly once from the merged result. No full records are ever
//! held in memory, only running counts.

pub mod extractor;
pub mod histogram;
pub mod summary;

pub use extractor::FieldExtractor;
pub use histogram::{Histogram, StatEntry};
pub use summary::SalarySummary;
