use std::fmt::Write;

use serde::Serialize;

use crate::benchmark::{BenchmarkConfig, BenchmarkSummary};
use crate::error::Result;
use crate::matching::Algorithm;

/// Plot-ready data for one algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub cumulative_mean_sizes: Vec<f64>,
    pub trial_times_secs: Vec<f64>,
    pub average_size: f64,
    pub average_time_secs: f64,
}

impl AlgorithmReport {
    pub fn from_summary(algorithm: Algorithm, summary: &BenchmarkSummary) -> Self {
        Self {
            algorithm,
            cumulative_mean_sizes: summary.cumulative_mean_sizes().to_vec(),
            trial_times_secs: summary
                .trial_times()
                .iter()
                .map(|elapsed| elapsed.as_secs_f64())
                .collect(),
            average_size: summary.average_size,
            average_time_secs: summary.average_time.as_secs_f64(),
        }
    }
}

/// Data handed to an external plotting layer: running-average curves per
/// algorithm plus the scalar means for a bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub iterations: usize,
    pub node_count: usize,
    pub edge_probability: f64,
    pub seed: u64,
    pub algorithms: Vec<AlgorithmReport>,
}

impl ComparisonReport {
    pub fn new(config: &BenchmarkConfig, seed: u64, runs: &[(Algorithm, BenchmarkSummary)]) -> Self {
        Self {
            iterations: config.iterations,
            node_count: config.node_count,
            edge_probability: config.edge_probability,
            seed,
            algorithms: runs
                .iter()
                .map(|(algorithm, summary)| AlgorithmReport::from_summary(*algorithm, summary))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text summary: all mean sizes first, then all mean times.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        for report in &self.algorithms {
            let _ = writeln!(
                out,
                "Average {} Matching size for 1 iteration: {}",
                report.algorithm, report.average_size
            );
        }
        out.push('\n');
        for report in &self.algorithms {
            let _ = writeln!(
                out,
                "Average {} Processing Time for 1 iteration: {}",
                report.algorithm, report.average_time_secs
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkDriver;

    fn report() -> ComparisonReport {
        let config = BenchmarkConfig {
            iterations: 3,
            node_count: 20,
            edge_probability: 0.2,
            seed: Some(11),
            verify_matchings: true,
        };
        let driver = BenchmarkDriver::new(config.clone()).unwrap();
        let runs = driver.compare(&Algorithm::ALL).unwrap();
        ComparisonReport::new(&config, driver.base_seed(), &runs)
    }

    #[test]
    fn summary_lists_sizes_then_times() {
        let text = report().render_summary();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Average Degree Matching size"));
        assert!(lines[1].starts_with("Average Weight Matching size"));
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Average Degree Processing Time"));
        assert!(lines[4].starts_with("Average Weight Processing Time"));
    }

    #[test]
    fn json_carries_aligned_sequences() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let algorithms = value["algorithms"].as_array().unwrap();
        assert_eq!(algorithms.len(), 2);
        assert_eq!(algorithms[0]["algorithm"], "degree");
        assert_eq!(algorithms[1]["cumulative_mean_sizes"].as_array().unwrap().len(), 3);
        assert_eq!(algorithms[1]["trial_times_secs"].as_array().unwrap().len(), 3);
    }
}
