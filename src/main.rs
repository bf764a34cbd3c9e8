use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::info;

use greedy_matching::{Algorithm, BenchmarkConfig, BenchmarkDriver, ComparisonReport};

const USAGE: &str = "usage: greedy-matching [--iterations N] [--nodes N] [--probability P] \
[--algorithm degree|weight|all] [--seed N] [--verify] [--json]";

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

struct CliOptions {
    config: BenchmarkConfig,
    algorithms: Vec<Algorithm>,
    json: bool,
}

fn parse_args() -> Result<CliOptions> {
    let mut options = CliOptions {
        config: BenchmarkConfig::default(),
        algorithms: Algorithm::ALL.to_vec(),
        json: false,
    };

    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--iterations" => options.config.iterations = flag_value(&flag, args.next())?,
            "--nodes" => options.config.node_count = flag_value(&flag, args.next())?,
            "--probability" => options.config.edge_probability = flag_value(&flag, args.next())?,
            "--seed" => options.config.seed = Some(flag_value(&flag, args.next())?),
            "--algorithm" => {
                let value: String = flag_value(&flag, args.next())?;
                options.algorithms = if value.eq_ignore_ascii_case("all") {
                    Algorithm::ALL.to_vec()
                } else {
                    vec![value.parse::<Algorithm>()?]
                };
            }
            "--verify" => options.config.verify_matchings = true,
            "--json" => options.json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => anyhow::bail!("Unexpected argument: {other}\n{USAGE}"),
        }
    }

    Ok(options)
}

fn flag_value<T>(flag: &str, value: Option<String>) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .with_context(|| format!("invalid value '{value}' for {flag}"))
}

fn main() -> Result<()> {
    init_logging();
    let options = parse_args()?;

    let driver =
        BenchmarkDriver::new(options.config.clone()).context("validate benchmark configuration")?;
    info!(
        "Comparing {} algorithm(s) over {} trials (seed {})",
        options.algorithms.len(),
        options.config.iterations,
        driver.base_seed()
    );

    let runs = driver
        .compare(&options.algorithms)
        .context("run matching benchmark")?;
    let report = ComparisonReport::new(&options.config, driver.base_seed(), &runs);

    if options.json {
        println!("{}", report.to_json().context("serialize comparison report")?);
    } else {
        print!("{}", report.render_summary());
    }

    Ok(())
}
