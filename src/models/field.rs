use std::fmt;

use anyhow::{Result, bail};
use serde::Serialize;

/// The set of field selectors accepted on the command line, in wire-name form
pub const ALLOWED_FIELDS: [&str; 4] = ["position", "salary", "recruiter", "technology_stack"];

/// The caller-chosen dimension being aggregated.
///
/// Selecting a field fixes both the histogram key type (plain string vs
/// composite recruiter key) and the extraction policy applied per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Position,
    Salary,
    Recruiter,
    TechnologyStack,
}

impl StatField {
    /// Parse a case-sensitive wire name into a selector
    ///
    /// # Errors
    ///
    /// Returns an error listing the allowed selectors for any other input.
    /// This is a configuration error: it is raised before any shard is read.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "position" => Ok(StatField::Position),
            "salary" => Ok(StatField::Salary),
            "recruiter" => Ok(StatField::Recruiter),
            "technology_stack" => Ok(StatField::TechnologyStack),
            other => bail!(
                "unknown statistic field '{}' (allowed: {})",
                other,
                ALLOWED_FIELDS.join(", ")
            ),
        }
    }

    /// The field name as it appears in the vacancy JSON objects
    pub fn wire_name(&self) -> &'static str {
        match self {
            StatField::Position => "position",
            StatField::Salary => "salary",
            StatField::Recruiter => "recruiter",
            StatField::TechnologyStack => "technology_stack",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
