//! CLI entry point for writing the emergency site datasets

use clap::Parser;
use emergency_tsp::io::cli::GeneratorCli;
use emergency_tsp::io::logging::init_logger;
use std::process::ExitCode;
use tracing::error;

fn run() -> emergency_tsp::Result<()> {
    let cli = GeneratorCli::parse();
    init_logger(cli.verbose)?;
    cli.run(&mut std::io::stdout().lock())?;
    Ok(())
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
