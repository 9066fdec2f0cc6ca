//! Structured diagnostics on stderr, leaving stdout to the report tables

use crate::io::error::{Result, SolverError};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset
///
/// Both settings keep a global level so the binaries' own error events pass.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "emergency_tsp=debug,info"
    } else {
        "warn"
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the default filter
///
/// # Errors
///
/// Returns [`SolverError::LoggerInit`] if a global subscriber is already set
pub fn init_logger(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init()
        .map_err(|e| SolverError::LoggerInit {
            reason: e.to_string(),
        })
}
