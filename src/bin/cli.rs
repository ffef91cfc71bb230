//! This is the command line tool that builds a prior over a grid, updates it
//! with coin flips and reports the posterior.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use gridbayes::{
    observations_from_sequence, summarize, CoinLikelihood, Grid, Observation,
    Pmf, Summary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Analysis completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

/// Draw 'n' flips of a coin that lands heads with probability 'bias'.
fn simulate(
    n: u32,
    bias: f64,
    seed: u64,
) -> Result<Vec<Observation>, String> {
    let coin = Bernoulli::new(bias).map_err(|e| e.to_string())?;
    let mut rng = StdRng::seed_from_u64(seed);
    let heads = (0..n).filter(|_| coin.sample(&mut rng)).count() as u32;
    log::info!("Simulated {} flips with bias {}: {} heads", n, bias, heads);
    Ok(vec![Observation::heads(heads), Observation::tails(n - heads)])
}

fn build_prior(name: &str, grid: &Arc<Grid>) -> gridbayes::Result<Pmf> {
    match name {
        "triangle" => Pmf::from_triangle(grid).normalize(),
        _ => Pmf::from_uniform(grid).normalize(),
    }
}

fn report(name: &str, s: &Summary) {
    log::info!("[{}] MAP estimate: {:.4}", name, s.map);
    log::info!("[{}] Mean: {:.4} (std {:.4})", name, s.mean, s.std_dev);
    log::info!(
        "[{}] {:.0}% credible interval: [{:.4}, {:.4}]",
        name,
        s.prob * 100.0,
        s.interval.0,
        s.interval.1
    );
}

fn run_prior(
    name: &str,
    grid: &Arc<Grid>,
    data: &[Observation],
    prob: f64,
    plot: bool,
) -> gridbayes::Result<Summary> {
    let prior = build_prior(name, grid)?;
    let posterior = prior.update(data, &CoinLikelihood)?;
    let summary = summarize(&posterior, prob)?;
    report(name, &summary);
    if plot {
        posterior.dump();
    }
    Ok(summary)
}

fn main() -> ExitCode {
    let matches = Command::new("CLI")
        .version("1.x")
        .about("Grid approximation of the probability of heads")
        .arg(
            Arg::new("low")
                .long("low")
                .help("Lower end of the parameter grid")
                .value_parser(value_parser!(f64))
                .default_value("0"),
        )
        .arg(
            Arg::new("high")
                .long("high")
                .help("Upper end of the parameter grid")
                .value_parser(value_parser!(f64))
                .default_value("1"),
        )
        .arg(
            Arg::new("points")
                .short('n')
                .long("points")
                .help("Number of grid points")
                .value_parser(value_parser!(usize))
                .default_value("101"),
        )
        .arg(
            Arg::new("prior")
                .long("prior")
                .value_name("prior")
                .help("The shape of the prior")
                .value_parser(["uniform", "triangle"])
                .default_value("uniform"),
        )
        .arg(
            Arg::new("heads")
                .long("heads")
                .help("Number of observed heads")
                .value_parser(value_parser!(u32))
                .conflicts_with_all(["sequence", "simulate"]),
        )
        .arg(
            Arg::new("tails")
                .long("tails")
                .help("Number of observed tails")
                .value_parser(value_parser!(u32))
                .conflicts_with_all(["sequence", "simulate"]),
        )
        .arg(
            Arg::new("sequence")
                .long("sequence")
                .value_name("FLIPS")
                .help("Observed flips, e.g. HHTH")
                .conflicts_with("simulate"),
        )
        .arg(
            Arg::new("simulate")
                .long("simulate")
                .value_name("N")
                .help("Simulate N flips instead of reading data")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("bias")
                .long("bias")
                .help("Probability of heads for simulated flips")
                .value_parser(value_parser!(f64))
                .default_value("0.5"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for simulated flips")
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            Arg::new("prob")
                .long("prob")
                .help("Mass of the credible interval")
                .value_parser(value_parser!(f64))
                .default_value("0.9"),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .help("Run the uniform and the triangle priors side by side")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("plot")
                .long("plot")
                .help("Print the posterior as a bar chart")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp(None)
    .init();

    let low = *matches.get_one::<f64>("low").unwrap();
    let high = *matches.get_one::<f64>("high").unwrap();
    let points = *matches.get_one::<usize>("points").unwrap();
    let prior_name = matches.get_one::<String>("prior").unwrap().clone();
    let prob = *matches.get_one::<f64>("prob").unwrap();
    let compare = matches.get_flag("compare");
    let plot = matches.get_flag("plot");

    let data = if let Some(n) = matches.get_one::<u32>("simulate") {
        let bias = *matches.get_one::<f64>("bias").unwrap();
        let seed = *matches.get_one::<u64>("seed").unwrap();
        simulate(*n, bias, seed)
    } else if let Some(seq) = matches.get_one::<String>("sequence") {
        observations_from_sequence(seq).map_err(|e| e.to_string())
    } else {
        let heads = matches.get_one::<u32>("heads").copied().unwrap_or(0);
        let tails = matches.get_one::<u32>("tails").copied().unwrap_or(0);
        Ok(vec![Observation::heads(heads), Observation::tails(tails)])
    };
    let data = match data {
        Ok(data) => data,
        Err(msg) => {
            log::error!("Invalid data: {}", msg);
            return ExitCode::FAILURE;
        }
    };

    let grid = match Grid::new(low, high, points) {
        Ok(grid) => Arc::new(grid),
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Grid of {} points over [{}, {}], data: {:?}",
        grid.len(),
        grid.low(),
        grid.high(),
        data
    );

    let timer = Timer::new();
    let priors: Vec<&str> = if compare {
        vec!["uniform", "triangle"]
    } else {
        vec![prior_name.as_str()]
    };

    let mut summaries = Vec::new();
    for name in &priors {
        match run_prior(name, &grid, &data, prob, plot) {
            Ok(s) => summaries.push(s),
            Err(e) => {
                log::error!("[{}] Inference failed: {}", name, e);
                return ExitCode::FAILURE;
            }
        }
    }

    if let [a, b] = summaries.as_slice() {
        log::info!(
            "Difference between priors: MAP {:.4}, mean {:.4}",
            (a.map - b.map).abs(),
            (a.mean - b.mean).abs()
        );
    }

    drop(timer);
    ExitCode::SUCCESS
}
