//! Command-line interfaces for the solver and the dataset generator

use crate::experiment;
use crate::generator::generate_dataset;
use crate::io::configuration::{
    APPROXIMATION_TIMING_SIZES, BRUTE_FORCE_TIMING_SIZES, COMPARISON_SIZES, DEFAULT_DATA_DIR,
    DEFAULT_SEED, DEFAULT_START_SITE, DEFAULT_TIMEOUT_SECS, GENERATED_SIZES, TEST_SMALL_SIZES,
};
use crate::io::dataset_store::DatasetStore;
use crate::io::error::Result;
use crate::io::progress::RouteProgress;
use crate::io::report;
use crate::solver::brute_force::BruteForceConfig;
use clap::{Args, CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

const SOLVER_WALKTHROUGH: &str = "\
Run the experiments in this order:
  1. tsp_solver --test-small
  2. tsp_solver --time-brute-force
  3. tsp_solver --time-approximation
  4. tsp_solver --compare-all";

#[derive(Parser, Debug)]
#[command(name = "tsp_solver")]
#[command(
    author,
    version,
    about = "Compare brute-force and nearest-neighbor TSP solutions on emergency site datasets",
    after_help = SOLVER_WALKTHROUGH
)]
/// Command-line arguments for the solver experiments
pub struct Cli {
    /// Experiment to run; none prints usage
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Directory holding the generated `sites_<n>.json` files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Seconds before a brute-force search gives up
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Suppress the brute-force progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log solver activity at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Mutually exclusive experiment flags
// Mirrors the four script modes, so each needs its own boolean
#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ModeArgs {
    /// Test correctness on small datasets
    #[arg(long)]
    pub test_small: bool,

    /// Time brute force on increasing sizes
    #[arg(long)]
    pub time_brute_force: bool,

    /// Time approximation on increasing sizes
    #[arg(long)]
    pub time_approximation: bool,

    /// Compare both algorithms side-by-side
    #[arg(long)]
    pub compare_all: bool,
}

/// Experiment selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `--test-small`
    TestSmall,
    /// `--time-brute-force`
    TimeBruteForce,
    /// `--time-approximation`
    TimeApproximation,
    /// `--compare-all`
    CompareAll,
}

impl Cli {
    /// Selected experiment, if any flag was given
    pub const fn mode(&self) -> Option<Mode> {
        let flags = &self.mode;
        if flags.test_small {
            Some(Mode::TestSmall)
        } else if flags.time_brute_force {
            Some(Mode::TimeBruteForce)
        } else if flags.time_approximation {
            Some(Mode::TimeApproximation)
        } else if flags.compare_all {
            Some(Mode::CompareAll)
        } else {
            None
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Exhaustive search settings derived from the flags
    pub const fn brute_force_config(&self) -> BruteForceConfig {
        BruteForceConfig {
            start: DEFAULT_START_SITE,
            timeout: Some(Duration::from_secs(self.timeout)),
        }
    }
}

/// Runs the selected experiment and renders its report
pub struct SolverApp {
    cli: Cli,
    store: DatasetStore,
}

impl SolverApp {
    /// Create a solver app from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let store = DatasetStore::new(cli.data_dir.clone());
        Self { cli, store }
    }

    /// Run the selected experiment, writing its report to `out`
    ///
    /// Without a mode flag the usage text is written instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the datasets are missing or invalid, or `out` fails
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let Some(mode) = self.cli.mode() else {
            Cli::command().write_long_help(out)?;
            return Ok(());
        };

        self.store.ensure_available()?;
        info!(?mode, data_dir = %self.store.dir().display(), "running experiment");

        let config = self.cli.brute_force_config();
        let show_progress = self.cli.should_show_progress();
        let progress = |sites: usize| RouteProgress::new(sites, show_progress);

        match mode {
            Mode::TestSmall => {
                let results = experiment::test_small_cases(
                    &self.store,
                    &TEST_SMALL_SIZES,
                    &config,
                    progress,
                )?;
                report::write_small_cases(out, &results)?;
            }
            Mode::TimeBruteForce => {
                let rows = experiment::time_brute_force(
                    &self.store,
                    &BRUTE_FORCE_TIMING_SIZES,
                    &config,
                    progress,
                )?;
                report::write_brute_force_timings(out, &rows, config.timeout)?;
            }
            Mode::TimeApproximation => {
                let rows = experiment::time_approximation(&self.store, &APPROXIMATION_TIMING_SIZES)?;
                report::write_approximation_timings(out, &rows)?;
            }
            Mode::CompareAll => {
                let rows =
                    experiment::compare_all(&self.store, &COMPARISON_SIZES, &config, progress)?;
                report::write_comparisons(out, &rows)?;
            }
        }
        Ok(())
    }
}

fn parse_site_count(value: &str) -> std::result::Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a site count: {e}"))?;
    if count == 0 {
        return Err("a dataset needs at least one site".to_string());
    }
    Ok(count)
}

#[derive(Parser, Debug)]
#[command(name = "location_generator")]
#[command(
    author,
    version,
    about = "Generate emergency site datasets for the TSP experiments"
)]
/// Command-line arguments for dataset generation
pub struct GeneratorCli {
    /// Directory the `sites_<n>.json` files are written to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub output_dir: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Dataset sizes to generate
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = GENERATED_SIZES,
        value_parser = parse_site_count
    )]
    pub sizes: Vec<usize>,

    /// Log generator activity at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl GeneratorCli {
    /// Write one dataset per requested size, reporting each file to `out`
    ///
    /// Every size uses the same seed, so smaller datasets are prefixes of larger ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a dataset cannot be written or `out` fails
    pub fn run(&self, out: &mut impl Write) -> Result<Vec<PathBuf>> {
        let store = DatasetStore::new(self.output_dir.clone());

        writeln!(out, "Generating emergency site datasets...")?;
        let mut written = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            let path = store.save(&generate_dataset(size, self.seed))?;
            writeln!(out, "  Created {} with {size} locations", path.display())?;
            written.push(path);
        }

        writeln!(out, "\nDataset generation complete!")?;
        writeln!(out, "Files created in '{}' directory", store.dir().display())?;
        info!(count = written.len(), seed = self.seed, "datasets generated");
        Ok(written)
    }
}
