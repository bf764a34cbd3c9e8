use std::time::{Duration, Instant};

use log::{debug, info, trace};

use crate::benchmark::statistics::{RunningStatistics, TrialResult};
use crate::error::{MatchingError, Result};
use crate::graph::generator::validate_probability;
use crate::graph::{GraphInstance, RandomGraphGenerator};
use crate::matching::{verify_matching, Algorithm, Matching};

#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub iterations: usize,
    pub node_count: usize,
    pub edge_probability: f64,
    /// Base seed; trial `i` uses `seed + i`. Drawn from the clock when unset.
    pub seed: Option<u64>,
    /// Check every matching against its graph after timing it.
    pub verify_matchings: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            node_count: 120,
            edge_probability: 0.04,
            seed: None,
            verify_matchings: false,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(MatchingError::InvalidConfig(
                "iteration count must be greater than zero".to_string(),
            ));
        }
        if u32::try_from(self.iterations).is_err() {
            return Err(MatchingError::InvalidConfig(format!(
                "iteration count {} exceeds the supported maximum of {}",
                self.iterations,
                u32::MAX
            )));
        }
        validate_probability(self.edge_probability)
    }
}

/// Statistics for one matcher over a full run.
#[derive(Debug, Clone)]
pub struct BenchmarkSummary {
    pub statistics: RunningStatistics,
    pub seed: u64,
    pub average_size: f64,
    pub average_time: Duration,
    pub wall_duration: Duration,
}

impl BenchmarkSummary {
    pub fn cumulative_mean_sizes(&self) -> &[f64] {
        self.statistics.cumulative_mean_sizes()
    }

    pub fn trial_times(&self) -> &[Duration] {
        self.statistics.trial_times()
    }
}

pub struct BenchmarkDriver {
    config: BenchmarkConfig,
    generator: RandomGraphGenerator,
    base_seed: u64,
}

impl BenchmarkDriver {
    /// Validates the configuration eagerly so a bad run fails before any trial.
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        let generator = RandomGraphGenerator::new(config.node_count, config.edge_probability)?;
        let base_seed = config.seed.unwrap_or_else(random_seed);
        Ok(Self {
            config,
            generator,
            base_seed,
        })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Graph used by trial `trial`; identical across matchers for one driver.
    pub fn trial_graph(&self, trial: usize) -> GraphInstance {
        self.generator.generate(self.base_seed.wrapping_add(trial as u64))
    }

    pub fn run_algorithm(&self, algorithm: Algorithm) -> Result<BenchmarkSummary> {
        info!(
            "{} matching: {} trials on G({}, {})",
            algorithm,
            self.config.iterations,
            self.config.node_count,
            self.config.edge_probability
        );
        self.run(algorithm.matcher())
    }

    /// Runs every trial sequentially with `matcher`. Any fault aborts the run.
    pub fn run<F>(&self, mut matcher: F) -> Result<BenchmarkSummary>
    where
        F: FnMut(&GraphInstance) -> Matching,
    {
        let iterations = self.config.iterations;
        let progress_step = (iterations / 10).max(1);
        let mut statistics = RunningStatistics::with_capacity(iterations);
        let run_start = Instant::now();

        for trial in 0..iterations {
            let graph = self.trial_graph(trial);

            let start = Instant::now();
            let matching = matcher(&graph);
            let end = Instant::now();
            let elapsed = measure_elapsed(trial, start, end)?;

            if self.config.verify_matchings {
                verify_matching(&graph, &matching)?;
            }

            trace!(
                "Trial {}: {} nodes, {} edges, matching size {}, elapsed {:?}",
                trial,
                graph.node_count(),
                graph.edge_count(),
                matching.len(),
                elapsed
            );
            statistics.record(TrialResult {
                matching_size: matching.len(),
                elapsed,
            });

            if (trial + 1) % progress_step == 0 {
                debug!(
                    "Completed {}/{} trials, running mean size {:.3}",
                    trial + 1,
                    iterations,
                    statistics.final_mean_size().unwrap_or_default()
                );
            }
        }

        let (Some(average_size), Some(average_time)) =
            (statistics.final_mean_size(), statistics.average_time())
        else {
            return Err(MatchingError::InvalidConfig(
                "benchmark finished without recording a trial".to_string(),
            ));
        };
        let wall_duration = run_start.elapsed();
        info!(
            "Finished {} trials in {:?}: mean size {:.3}, mean time {:?}",
            iterations, wall_duration, average_size, average_time
        );

        Ok(BenchmarkSummary {
            statistics,
            seed: self.base_seed,
            average_size,
            average_time,
            wall_duration,
        })
    }

    /// Benchmarks each algorithm in turn over the same graph sequence.
    pub fn compare(&self, algorithms: &[Algorithm]) -> Result<Vec<(Algorithm, BenchmarkSummary)>> {
        algorithms
            .iter()
            .map(|&algorithm| Ok((algorithm, self.run_algorithm(algorithm)?)))
            .collect()
    }
}

/// Elapsed time between two clock readings, or a [`MatchingError::TimingFault`]
/// when `end` precedes `start`.
pub fn measure_elapsed(trial: usize, start: Instant, end: Instant) -> Result<Duration> {
    end.checked_duration_since(start)
        .ok_or_else(|| MatchingError::TimingFault {
            trial,
            regression: start.duration_since(end),
        })
}

fn random_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
