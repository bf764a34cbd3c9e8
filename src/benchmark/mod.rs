pub mod driver;
pub mod statistics;

pub use driver::{measure_elapsed, BenchmarkConfig, BenchmarkDriver, BenchmarkSummary};
pub use statistics::{RunningStatistics, TrialResult};
