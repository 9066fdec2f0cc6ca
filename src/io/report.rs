//! Fixed-width text tables for the experiment results
//!
//! Every renderer writes to a caller-supplied [`Write`], so the binary sends
//! tables to stdout while tests capture them in a buffer.

use crate::experiment::{ApproximationTiming, BruteForceTiming, Comparison, SmallCaseResult};
use crate::io::configuration::BANNER_WIDTH;
use crate::solver::SolverKind;
use crate::solver::brute_force::BruteForceOutcome;
use std::io::{self, Write};
use std::time::Duration;

/// Section header framed by `=` rules, preceded by a blank line
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Format an integer with `,` thousands separators
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Results of `--test-small`
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_small_cases(out: &mut impl Write, results: &[SmallCaseResult]) -> io::Result<()> {
    write_banner(out, "TESTING: Small Cases (Verifying Correctness)")?;

    for result in results {
        writeln!(out, "\nTesting {} locations...", result.size)?;
        match &result.brute_force {
            BruteForceOutcome::Complete { tour, .. } => writeln!(
                out,
                "  {}: Distance = {:.2}",
                SolverKind::BruteForce,
                tour.distance
            )?,
            BruteForceOutcome::TimedOut { routes_checked, .. } => writeln!(
                out,
                "  {}: TIMEOUT after checking {} routes",
                SolverKind::BruteForce,
                group_thousands(u128::from(*routes_checked))
            )?,
        }
        writeln!(
            out,
            "  {}: Distance = {:.2}",
            SolverKind::NearestNeighbor,
            result.nearest_neighbor.distance
        )?;
        match result.quality() {
            Some(quality) => writeln!(out, "  Approximation Quality: {quality:.1}% of optimal")?,
            None => writeln!(out, "  Approximation Quality: N/A")?,
        }
    }
    Ok(())
}

/// Results of `--time-brute-force`
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_brute_force_timings(
    out: &mut impl Write,
    rows: &[BruteForceTiming],
    timeout: Option<Duration>,
) -> io::Result<()> {
    write_banner(out, "TIMING: Brute Force Algorithm")?;
    if let Some(timeout) = timeout {
        writeln!(
            out,
            "\nWARNING: Larger sizes may take several minutes or timeout at {} seconds",
            timeout.as_secs()
        )?;
    }

    writeln!(
        out,
        "\n{:<6} {:<15} {:<12} {:<12} Status",
        "Size", "Routes", "Time (s)", "Distance"
    )?;
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))?;

    for row in rows {
        let routes = row
            .total_routes
            .map_or_else(|| "overflow".to_string(), group_thousands);
        let elapsed = row.elapsed.as_secs_f64();
        match row.outcome.tour() {
            Some(tour) => writeln!(
                out,
                "{:<6} {routes:<15} {elapsed:<12.3} {:<12.2} Complete",
                row.size, tour.distance
            )?,
            None => writeln!(
                out,
                "{:<6} {routes:<15} {elapsed:<12.3} {:<12} TIMEOUT",
                row.size, "N/A"
            )?,
        }
    }
    Ok(())
}

/// Results of `--time-approximation`
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_approximation_timings(
    out: &mut impl Write,
    rows: &[ApproximationTiming],
) -> io::Result<()> {
    write_banner(out, "TIMING: Nearest Neighbor Approximation")?;

    writeln!(out, "\n{:<6} {:<12} {:<12}", "Size", "Time (s)", "Distance")?;
    writeln!(out, "{}", "-".repeat(40))?;

    for row in rows {
        writeln!(
            out,
            "{:<6} {:<12.6} {:<12.2}",
            row.size,
            row.elapsed.as_secs_f64(),
            row.tour.distance
        )?;
    }
    Ok(())
}

/// Results of `--compare-all`, followed by the closing notes
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_comparisons(out: &mut impl Write, rows: &[Comparison]) -> io::Result<()> {
    write_banner(out, "COMPARISON: Brute Force vs Nearest Neighbor")?;
    writeln!(
        out,
        "\nThis compares both algorithms on datasets where brute force completes."
    )?;

    writeln!(
        out,
        "\n{:<6} {:<12} {:<12} {:<14} {:<14} {:<12}",
        "Size", "Optimal", "Approx", "% of Optimal", "BF Time (s)", "NN Time (s)"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;

    for row in rows {
        let approx = row.nearest_neighbor.distance;
        let nn_time = row.nearest_neighbor_elapsed.as_secs_f64();
        match (row.brute_force.tour(), row.quality()) {
            (Some(optimal), Some(quality)) => writeln!(
                out,
                "{:<6} {:<12.2} {approx:<12.2} {quality:<14.1} {:<14.3} {nn_time:<12.6}",
                row.size,
                optimal.distance,
                row.brute_force_elapsed.as_secs_f64()
            )?,
            (Some(optimal), None) => writeln!(
                out,
                "{:<6} {:<12.2} {approx:<12.2} {:<14} {:<14.3} {nn_time:<12.6}",
                row.size,
                optimal.distance,
                "N/A",
                row.brute_force_elapsed.as_secs_f64()
            )?,
            (None, _) => writeln!(
                out,
                "{:<6} {:<12} {approx:<12.2} {:<14} {:<14} {nn_time:<12.6}",
                row.size, "TIMEOUT", "N/A", "TIMEOUT"
            )?,
        }
    }

    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(
        out,
        "Note: Approximation runs in polynomial time, handling larger sizes easily."
    )?;
    writeln!(out, "Brute force becomes impractical beyond 12-15 locations.")?;
    writeln!(out, "{rule}")
}
