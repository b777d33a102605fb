//! Sharded aggregation driver
//!
//! # Error Handling Strategy
//!
//! The driver distinguishes three outcomes, in line with the rest of the
//! crate's graceful-degradation approach:
//!
//! - **Configuration errors**: an invalid worker count or an unreadable
//!   directory is fatal before any shard is touched.
//!
//! - **Shard errors**: in the directory path, a shard that cannot be opened
//!   or tokenized contributes an empty histogram; the failure is logged to
//!   stderr and counted in the result, and the remaining shards proceed.
//!   One bad file never blocks the rest of a directory. The single-shard
//!   path has no fallback, so the same failure propagates to the caller.
//!
//! - **Excluded records**: records failing the required-field rule are the
//!   expected steady state, never an error; they are counted and reported in
//!   the summary line.

pub mod driver;
pub mod shards;

pub use driver::{DEFAULT_WORKERS, FieldStats, aggregate_directory, aggregate_file};
pub use shards::discover_shards;
