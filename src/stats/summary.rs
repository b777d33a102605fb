use serde::Serialize;

use crate::models::StatKey;
use crate::stats::histogram::Histogram;

/// Exact min/average/max for the salary field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalarySummary {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl SalarySummary {
    /// Recompute the summary from the fully merged histogram of canonical
    /// salary keys.
    ///
    /// The average is an exact weighted mean over the expanded multiset,
    /// `sum(key * count) / sum(count)`. Computing this once from the merged
    /// histogram is what keeps the result identical whether the records were
    /// processed as one shard or many; averaging per-shard summaries would be
    /// wrong whenever shards differ in size or distribution, so per-shard
    /// summaries are never produced in the first place.
    ///
    /// Returns `None` when the histogram holds no salary values.
    pub fn from_histogram(histogram: &Histogram) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut weighted_sum = 0.0;
        let mut total: u64 = 0;

        for (key, count) in histogram.iter() {
            let text = match key {
                StatKey::Plain(text) => text,
                StatKey::Recruiter(_) => continue,
            };
            // Keys come from canonical_salary so this parse cannot fail for
            // histograms built under the salary selector
            let Ok(value) = text.parse::<f64>() else { continue };
            min = min.min(value);
            max = max.max(value);
            weighted_sum += value * count as f64;
            total += count;
        }

        if total == 0 {
            return None;
        }

        Some(SalarySummary { min, max, average: weighted_sum / total as f64 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary_histogram(pairs: &[(&str, u64)]) -> Histogram {
        let mut histogram = Histogram::new();
        for (key, count) in pairs {
            for _ in 0..*count {
                histogram.increment(StatKey::plain(*key));
            }
        }
        histogram
    }

    #[test]
    fn test_weighted_average_is_exact() {
        let histogram = salary_histogram(&[("1000.0", 2), ("2000.0", 1)]);
        let summary = SalarySummary::from_histogram(&histogram).unwrap();
        assert_eq!(summary.min, 1000.0);
        assert_eq!(summary.max, 2000.0);
        assert!((summary.average - 4000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_value() {
        let histogram = salary_histogram(&[("1500.5", 3)]);
        let summary = SalarySummary::from_histogram(&histogram).unwrap();
        assert_eq!(summary.min, 1500.5);
        assert_eq!(summary.max, 1500.5);
        assert_eq!(summary.average, 1500.5);
    }

    #[test]
    fn test_empty_histogram_has_no_summary() {
        assert!(SalarySummary::from_histogram(&Histogram::new()).is_none());
    }
}
