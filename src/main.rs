//! # brute-tour CLI
//!
//! Generates random cities, solves the closed tour by exhaustive search and
//! optionally plots the result.

use brute_tour::utils::coordinates::generate_instance;
use brute_tour::utils::render::render_tour;
use brute_tour::{
    ExhaustiveSolver, SearchMode, SolverConfig, SolverResult, TourSolution, TourSolver, TspInstance,
};
use clap::Parser;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line interface for brute-tour
#[derive(Parser)]
#[command(name = "brute-tour")]
#[command(about = "Exact travelling-salesman tours by brute force")]
#[command(long_about = "Places N cities on a shuffled grid and checks every visiting order:
  brute-tour -n 8                    # 8 cities, random start city
  brute-tour -n 8 -s 0 --seed 42     # reproducible run starting at city 0
  brute-tour -n 9 --plot tour.png    # also draw the best tour

Runtime grows with (N-1)!, so values above 12 take a long time.")]
#[command(version)]
struct Cli {
    /// Number of cities (at least 4)
    #[arg(short = 'n', long)]
    cities: Option<usize>,

    /// Index of the start/end city; random when omitted
    #[arg(short, long)]
    start: Option<usize>,

    /// Seed for the random generator; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Perturb coordinates off the integer grid
    #[arg(long)]
    jitter: bool,

    /// Search only a prefix of the permutations (approximate, may miss the optimum)
    #[arg(long)]
    bounded: bool,

    /// Worker threads (1 runs sequentially)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Write a PNG plot of the best tour
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Print the full solution as JSON
    #[arg(long)]
    json: bool,

    /// Load settings from a JSON file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// File settings (or defaults) with command-line flags layered on top
    fn resolve_config(&self) -> SolverResult<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)?,
            None => SolverConfig::default(),
        };

        if let Some(cities) = self.cities {
            config.cities = cities;
        }
        if self.start.is_some() {
            config.start_city = self.start;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.jitter {
            config.jitter = true;
        }
        if self.bounded {
            config.mode = SearchMode::Bounded;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if self.plot.is_some() {
            config.plot = self.plot.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> SolverResult<()> {
    let config = cli.resolve_config()?;

    let seed = config.resolve_seed();
    info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let instance = generate_instance(config.cities, config.start_city, config.jitter, &mut rng)?;

    if !config.mode.is_exact() {
        warn!("Bounded search skips part of the permutations; the tour may not be optimal");
    }

    let solver = ExhaustiveSolver::from_config(&config);
    let start_time = std::time::Instant::now();
    let solution = solver.solve(&instance)?;
    let elapsed = start_time.elapsed();

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), cli.json, &config, &instance, &solution, elapsed)?;

    if let Some(path) = &config.plot {
        render_tour(&solution, path)?;
        info!("Tour plot saved to {}", path.display());
    }

    Ok(())
}

/// Prints the run report, or only the JSON document when `json` is set so
/// stdout stays machine-readable.
fn write_report<W: Write>(
    out: &mut W,
    json: bool,
    config: &SolverConfig,
    instance: &TspInstance,
    solution: &TourSolution,
    elapsed: Duration,
) -> SolverResult<()> {
    let start_note = if config.start_city.is_some() { "" } else { " (random)" };

    if json {
        info!(
            "{} cities, start city {}{}",
            instance.len(),
            instance.start_city,
            start_note
        );
        writeln!(out, "{}", serde_json::to_string_pretty(solution)?)?;
        return Ok(());
    }

    writeln!(out, "Number of cities: {}", instance.len())?;
    writeln!(out, "Start city: {}{}", instance.start_city, start_note)?;
    writeln!(out, "Best tour (found in {:.2?}):", elapsed)?;
    writeln!(out, "------------------------------------------")?;
    writeln!(out, "  Route: {:?}", solution.visiting_order)?;
    writeln!(out, "  Total distance: {:.3}", solution.total_distance)?;
    writeln!(
        out,
        "  Permutations evaluated: {} ({})",
        solution.permutations_evaluated, solution.mode
    )?;
    for (city, (x, y)) in solution.coordinates.iter().enumerate() {
        writeln!(out, "  City {}: ({:.1}, {:.1})", city, x, y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(args: &[&str]) -> (Cli, SolverConfig, TspInstance, TourSolution) {
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.resolve_config().unwrap();
        let mut rng = StdRng::seed_from_u64(config.resolve_seed());
        let instance =
            generate_instance(config.cities, config.start_city, config.jitter, &mut rng).unwrap();
        let solution = ExhaustiveSolver::from_config(&config).solve(&instance).unwrap();
        (cli, config, instance, solution)
    }

    #[test]
    fn test_json_report_is_only_json() {
        let (cli, config, instance, solution) =
            solved(&["brute-tour", "-n", "5", "-s", "0", "--seed", "1", "--json"]);
        assert!(cli.json);

        let mut out = Vec::new();
        write_report(&mut out, cli.json, &config, &instance, &solution, Duration::ZERO).unwrap();

        let parsed: TourSolution = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.visiting_order, solution.visiting_order);
        assert_eq!(parsed.visiting_order.first(), Some(&0));
        assert_eq!(parsed.permutations_evaluated, 24);
    }

    #[test]
    fn test_text_report_has_header() {
        let (cli, config, instance, solution) = solved(&["brute-tour", "-n", "5", "--seed", "3"]);

        let mut out = Vec::new();
        write_report(&mut out, cli.json, &config, &instance, &solution, Duration::ZERO).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Number of cities: 5\n"));
        assert!(text.contains(&format!("Start city: {} (random)", instance.start_city)));
        assert!(text.contains("Permutations evaluated: 24 (exact)"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["brute-tour", "-n", "7", "--bounded", "-t", "2"]).unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.cities, 7);
        assert_eq!(config.mode, SearchMode::Bounded);
        assert_eq!(config.threads, Some(2));
    }
}
