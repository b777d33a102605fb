//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for one vacancy record, kept as raw JSON members so tests can mix
/// strings, numbers, explicit nulls and absent fields freely
#[derive(Clone)]
pub struct VacancyBuilder {
    members: Vec<(String, String)>,
}

impl VacancyBuilder {
    /// Create a record with no fields at all
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Create a record satisfying the required-field rule
    pub fn valid(position: &str, recruiter_first_name: &str) -> Self {
        Self::new().position(position).recruiter_first_name(recruiter_first_name)
    }

    pub fn position(self, value: &str) -> Self {
        self.string_field("position", value)
    }

    pub fn salary(self, value: f64) -> Self {
        self.raw_field("salary", &format!("{}", value))
    }

    pub fn recruiter_first_name(self, value: &str) -> Self {
        self.string_field("recruiter_first_name", value)
    }

    pub fn recruiter_last_name(self, value: &str) -> Self {
        self.string_field("recruiter_last_name", value)
    }

    pub fn recruiter_company_name(self, value: &str) -> Self {
        self.string_field("recruiter_company_name", value)
    }

    pub fn technology_stack(self, value: &str) -> Self {
        self.string_field("technology_stack", value)
    }

    /// Add an explicit JSON null for `name`
    pub fn null_field(self, name: &str) -> Self {
        self.raw_field(name, "null")
    }

    /// Add a string-valued field (test data must not contain quotes)
    pub fn string_field(self, name: &str, value: &str) -> Self {
        let quoted = format!("\"{}\"", value);
        self.raw_field(name, &quoted)
    }

    /// Add a field with a raw JSON value
    pub fn raw_field(mut self, name: &str, raw_value: &str) -> Self {
        self.members.push((name.to_string(), raw_value.to_string()));
        self
    }

    /// Convert to a JSON object string
    pub fn to_json(&self) -> String {
        let members = self
            .members
            .iter()
            .map(|(name, value)| format!("\"{}\":{}", name, value))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{}}}", members)
    }
}

impl Default for VacancyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render records as a JSON array document
pub fn shard_content(records: &[VacancyBuilder]) -> String {
    let body = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join(",");
    format!("[{}]", body)
}

/// Builder for a directory of shard files
pub struct ShardDirBuilder {
    temp_dir: TempDir,
}

impl ShardDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a shard file holding the given records
    pub fn with_shard(self, name: &str, records: &[VacancyBuilder]) -> Self {
        self.with_raw_shard(name, &shard_content(records))
    }

    /// Add a shard file with arbitrary content (for corrupt-shard tests)
    pub fn with_raw_shard(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write shard");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ShardDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a standalone shard file and return its temp directory
pub fn single_shard(records: &[VacancyBuilder]) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("shard.json");
    fs::write(&path, shard_content(records)).expect("Failed to write shard");
    (dir, path)
}

/// A deterministic set of N records cycling positions, salaries, recruiters
/// and technology stacks; used by the shard-split invariance tests
pub fn synthetic_records(count: usize) -> Vec<VacancyBuilder> {
    let positions = ["Java Developer", "Rust Developer", "Data Engineer"];
    let salaries = [1000.0, 1500.0, 2000.0, 2500.0];
    let recruiters = [("John", "Doe", Some("Acme")), ("Jane", "Roe", None)];
    let stacks = ["Java, Spring", "Rust, Tokio, Serde", "Python"];

    (0..count)
        .map(|i| {
            let (first, last, company) = recruiters[i % recruiters.len()];
            let mut record = VacancyBuilder::valid(positions[i % positions.len()], first)
                .recruiter_last_name(last)
                .salary(salaries[i % salaries.len()])
                .technology_stack(stacks[i % stacks.len()]);
            if let Some(company) = company {
                record = record.recruiter_company_name(company);
            }
            record
        })
        .collect()
}
