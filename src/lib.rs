pub mod benchmark;
pub mod error;
pub mod graph;
pub mod matching;
pub mod report;

pub use benchmark::{BenchmarkConfig, BenchmarkDriver, BenchmarkSummary, RunningStatistics};
pub use error::{MatchingError, Result};
pub use graph::{GraphId, GraphInstance, GraphLoader, GraphWriter, RandomGraphGenerator};
pub use matching::{
    maximum_degree_matching, maximum_weight_matching, verify_matching, Algorithm, Matching,
};
pub use report::{AlgorithmReport, ComparisonReport};
