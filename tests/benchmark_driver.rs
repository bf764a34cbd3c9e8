use std::time::Duration;

use anyhow::Result;
use greedy_matching::{
    Algorithm, BenchmarkConfig, BenchmarkDriver, ComparisonReport, Matching, MatchingError,
};

fn config(iterations: usize) -> BenchmarkConfig {
    BenchmarkConfig {
        iterations,
        node_count: 120,
        edge_probability: 0.04,
        seed: Some(2024),
        verify_matchings: true,
    }
}

#[test]
fn single_trial_statistics_are_exact() -> Result<()> {
    let driver = BenchmarkDriver::new(config(1))?;
    let expected = Algorithm::Weight.matcher()(&driver.trial_graph(0)).len() as f64;
    let summary = driver.run_algorithm(Algorithm::Weight)?;

    assert_eq!(summary.cumulative_mean_sizes(), &[expected]);
    assert_eq!(summary.trial_times().len(), 1);
    assert!(summary.trial_times()[0] >= Duration::ZERO);
    assert_eq!(summary.average_size, expected);
    assert_eq!(summary.average_time, summary.trial_times()[0]);
    Ok(())
}

#[test]
fn sequences_stay_aligned_with_iterations() -> Result<()> {
    let driver = BenchmarkDriver::new(config(25))?;
    let runs = driver.compare(&Algorithm::ALL)?;
    assert_eq!(runs.len(), 2);
    for (algorithm, summary) in &runs {
        assert_eq!(summary.cumulative_mean_sizes().len(), 25, "{algorithm}");
        assert_eq!(summary.trial_times().len(), 25, "{algorithm}");
        assert_eq!(
            summary.average_size,
            *summary.cumulative_mean_sizes().last().unwrap()
        );
        assert!(summary.average_size <= 60.0);
    }

    let report = ComparisonReport::new(driver.config(), driver.base_seed(), &runs);
    assert_eq!(report.algorithms.len(), 2);
    assert_eq!(report.seed, 2024);
    Ok(())
}

#[test]
fn cumulative_mean_matches_prefix_sums_for_fake_sizes() -> Result<()> {
    let sizes = [10usize, 0, 7, 7, 2, 30, 1];
    let driver = BenchmarkDriver::new(BenchmarkConfig {
        verify_matchings: false,
        ..config(sizes.len())
    })?;

    let mut trial = 0;
    let summary = driver.run(|_graph| {
        let matching: Matching = (0..sizes[trial])
            .map(|i| (format!("left{i}"), format!("right{i}")))
            .collect();
        trial += 1;
        matching
    })?;

    for (i, mean) in summary.cumulative_mean_sizes().iter().enumerate() {
        let prefix: usize = sizes[..=i].iter().sum();
        assert!((mean - prefix as f64 / (i + 1) as f64).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn invalid_probability_fails_before_any_trial() {
    let result = BenchmarkDriver::new(BenchmarkConfig {
        edge_probability: -0.5,
        ..config(10)
    });
    assert!(matches!(result, Err(MatchingError::InvalidGraphInput(_))));
}

#[test]
fn invalid_matching_aborts_the_run() -> Result<()> {
    let driver = BenchmarkDriver::new(config(3))?;
    let result = driver.run(|_graph| {
        std::iter::once(("ghost".to_string(), "phantom".to_string())).collect()
    });
    assert!(matches!(result, Err(MatchingError::InvalidMatching(_))));
    Ok(())
}
