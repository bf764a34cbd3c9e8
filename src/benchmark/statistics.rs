use std::time::Duration;

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    pub matching_size: usize,
    pub elapsed: Duration,
}

/// Append-only per-trial statistics.
///
/// `cumulative_mean_sizes[i]` is the mean matching size over trials `0..=i`,
/// and `trial_times[i]` is the elapsed time of trial `i`; both grow by exactly
/// one entry per recorded trial.
#[derive(Debug, Clone, Default)]
pub struct RunningStatistics {
    size_total: u64,
    cumulative_mean_sizes: Vec<f64>,
    trial_times: Vec<Duration>,
}

impl RunningStatistics {
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            size_total: 0,
            cumulative_mean_sizes: Vec::with_capacity(trials),
            trial_times: Vec::with_capacity(trials),
        }
    }

    pub fn record(&mut self, trial: TrialResult) {
        self.size_total += trial.matching_size as u64;
        self.trial_times.push(trial.elapsed);
        let count = self.trial_times.len() as f64;
        self.cumulative_mean_sizes.push(self.size_total as f64 / count);
    }

    pub fn len(&self) -> usize {
        self.trial_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trial_times.is_empty()
    }

    pub fn cumulative_mean_sizes(&self) -> &[f64] {
        &self.cumulative_mean_sizes
    }

    pub fn trial_times(&self) -> &[Duration] {
        &self.trial_times
    }

    pub fn final_mean_size(&self) -> Option<f64> {
        self.cumulative_mean_sizes.last().copied()
    }

    pub fn total_time(&self) -> Duration {
        self.trial_times.iter().sum()
    }

    pub fn average_time(&self) -> Option<Duration> {
        let trials = u32::try_from(self.len()).ok()?;
        self.total_time().checked_div(trials)
    }
}
