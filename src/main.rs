//! CLI entry point for the brute-force versus nearest-neighbor experiments

use clap::Parser;
use emergency_tsp::io::cli::{Cli, SolverApp};
use emergency_tsp::io::logging::init_logger;
use std::process::ExitCode;
use tracing::error;

fn run() -> emergency_tsp::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;
    let app = SolverApp::new(cli);
    app.run(&mut std::io::stdout().lock())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
