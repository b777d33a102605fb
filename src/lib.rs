//! vacancy-stats - Frequency and aggregate statistics over vacancy JSON files
//!
//! This library computes per-field statistics over vacancy records stored as
//! JSON arrays, across one file or a whole directory of shard files. It
//! supports:
//!
//! - Streaming, token-driven extraction: shards are never buffered in memory,
//!   only running counts are kept
//! - Four selectable fields: `position`, `salary`, `recruiter` and
//!   `technology_stack`, each with its own key shape and capture policy
//! - Exact salary min/average/max recomputed from the merged histogram
//! - A bounded worker pool for directories, with a best-effort policy: a
//!   corrupt shard is logged and skipped instead of failing the aggregation
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use vacancy_stats::{StatField, aggregate_directory};
//!
//! let stats = aggregate_directory(Path::new("./vacancies"), StatField::Position, 4)?;
//! for entry in &stats.entries {
//!     println!("{}: {}", entry.key, entry.count);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregator;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod stats;

// Re-export commonly used types
pub use aggregator::{DEFAULT_WORKERS, FieldStats, aggregate_directory, aggregate_file};
pub use models::{RecruiterKey, StatField, StatKey};
pub use stats::{FieldExtractor, Histogram, SalarySummary, StatEntry};
