use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::aggregator::{DEFAULT_WORKERS, FieldStats, aggregate_directory, aggregate_file};
use crate::models::StatField;

#[derive(Parser)]
#[command(name = "vacancy-stats")]
#[command(version = "0.1.0")]
#[command(
    about = "Compute per-field statistics over JSON vacancy files",
    long_about = None
)]
pub struct Cli {
    /// A vacancy JSON file, or a directory of .json shards
    pub input: PathBuf,

    /// Statistic field: position, salary, recruiter or technology_stack
    pub field: String,

    /// Worker threads for directory aggregation
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Print the result as JSON instead of the plain report
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Reject an unknown selector before any shard is read
    let field = StatField::parse(&cli.field)?;

    let stats = if cli.input.is_dir() {
        aggregate_directory(&cli.input, field, cli.workers)?
    } else {
        aggregate_file(&cli.input, field)?
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("failed to serialize statistics")?
        );
    } else {
        print_report(&stats);
    }

    Ok(())
}

fn print_report(stats: &FieldStats) {
    let title = format!("Vacancy statistics by '{}'", stats.field);
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));

    if stats.entries.is_empty() {
        println!("(no matching records)");
    }
    for entry in &stats.entries {
        println!("{}: {}", entry.key, entry.count);
    }

    if let Some(salary) = &stats.salary {
        println!();
        println!("Min salary:     {}", salary.min);
        println!("Max salary:     {}", salary.max);
        println!("Average salary: {:.2}", salary.average);
    }

    println!();
    println!(
        "Shards: {} processed, {} failed; {} records excluded",
        stats.shard_count - stats.failed_shards,
        stats.failed_shards,
        stats.excluded_records
    );
}
