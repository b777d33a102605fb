use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use rayon::prelude::*;
use serde::Serialize;

use crate::aggregator::shards::discover_shards;
use crate::models::StatField;
use crate::parsers::stream_tokens;
use crate::stats::{FieldExtractor, Histogram, SalarySummary, StatEntry};

/// Default worker count for directory aggregation
pub const DEFAULT_WORKERS: usize = 4;

/// The finalized result of an aggregation, identical in shape for the
/// single-shard and directory paths.
#[derive(Debug, Serialize)]
pub struct FieldStats {
    pub field: StatField,
    /// Sorted by count descending, ties ascending by key
    pub entries: Vec<StatEntry>,
    /// Present only under the salary selector, and only when at least one
    /// salary value was counted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalarySummary>,
    pub shard_count: usize,
    pub failed_shards: usize,
    pub excluded_records: u64,
}

/// Aggregate a single shard file.
///
/// Runs the extractor synchronously on the calling thread. Unlike the
/// directory path there is no fallback here: an unreadable or malformed
/// shard propagates as an error.
pub fn aggregate_file(path: &Path, field: StatField) -> Result<FieldStats> {
    let (histogram, excluded) = process_shard(path, field)?;
    Ok(finalize(field, histogram, excluded, 1, 0))
}

/// Aggregate every `.json` shard directly inside `dir` across a bounded
/// worker pool.
///
/// Each worker owns one extractor and one histogram per shard, so the
/// parallel phase needs no synchronization; per-shard histograms are merged
/// on the calling thread after all tasks have joined. Because merging is
/// commutative and associative and the salary summary is recomputed from the
/// merged histogram, the result is identical no matter how records are split
/// across shards or in which order shards complete.
///
/// # Errors
///
/// Returns an error if `workers` is zero, if the directory cannot be listed,
/// or if the worker pool cannot be built. A shard that fails to open or
/// tokenize is *not* an error: it contributes an empty histogram, the failure
/// is logged to stderr, and the remaining shards proceed.
pub fn aggregate_directory(dir: &Path, field: StatField, workers: usize) -> Result<FieldStats> {
    ensure!(workers >= 1, "worker count must be at least 1, got {}", workers);

    let shards = discover_shards(dir)?;
    let shard_count = shards.len();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("failed to initialize worker pool")?;

    let outcomes: Vec<_> = pool
        .install(|| shards.par_iter().map(|path| (path, process_shard(path, field))).collect());

    // Fan-in: single-threaded merge after the full join
    let mut cumulative = Histogram::new();
    let mut excluded_records = 0;
    let mut failed_shards = 0;
    for (path, outcome) in outcomes {
        match outcome {
            Ok((histogram, excluded)) => {
                cumulative.merge(histogram);
                excluded_records += excluded;
            }
            Err(e) => {
                failed_shards += 1;
                eprintln!("Warning: Failed to process shard {}: {:#}", path.display(), e);
            }
        }
    }

    eprintln!(
        "Aggregated {} shards ({} failed), {} records excluded",
        shard_count, failed_shards, excluded_records
    );

    Ok(finalize(field, cumulative, excluded_records, shard_count, failed_shards))
}

/// Fully consume one shard: open, tokenize, extract
fn process_shard(path: &Path, field: StatField) -> Result<(Histogram, u64)> {
    let file =
        File::open(path).with_context(|| format!("failed to open shard {}", path.display()))?;
    let mut extractor = FieldExtractor::new(field);
    stream_tokens(BufReader::new(file), &mut extractor)
        .with_context(|| format!("failed to tokenize shard {}", path.display()))?;
    Ok(extractor.into_parts())
}

fn finalize(
    field: StatField,
    histogram: Histogram,
    excluded_records: u64,
    shard_count: usize,
    failed_shards: usize,
) -> FieldStats {
    let salary = match field {
        StatField::Salary => SalarySummary::from_histogram(&histogram),
        _ => None,
    };
    FieldStats {
        field,
        entries: histogram.into_sorted_entries(),
        salary,
        shard_count,
        failed_shards,
        excluded_records,
    }
}
