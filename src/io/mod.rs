//! Input/output: command line, dataset files, reports, logging and errors

/// Solver and generator command-line interfaces
pub mod cli;
/// Runtime defaults and experiment constants
pub mod configuration;
/// Dataset file storage
pub mod dataset_store;
/// Error types shared by the whole crate
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for exhaustive search
pub mod progress;
/// Fixed-width report tables
pub mod report;
