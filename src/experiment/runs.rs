use crate::experiment::timing::timed;
use crate::io::configuration::DEFAULT_START_SITE;
use crate::io::dataset_store::DatasetStore;
use crate::io::error::Result;
use crate::math::combinatorics::route_count;
use crate::model::Tour;
use crate::solver::brute_force::{self, BruteForceConfig, BruteForceOutcome};
use crate::solver::{SearchProgress, approximation_ratio, nearest_neighbor};
use std::time::Duration;
use tracing::info;

/// Both solvers run on one small dataset
#[derive(Debug, Clone, PartialEq)]
pub struct SmallCaseResult {
    /// Number of sites
    pub size: usize,
    /// Exhaustive search result
    pub brute_force: BruteForceOutcome,
    /// Greedy tour
    pub nearest_neighbor: Tour,
}

impl SmallCaseResult {
    /// Greedy length as a percentage of the optimum, if known
    pub fn quality(&self) -> Option<f64> {
        let optimal = self.brute_force.tour()?.distance;
        approximation_ratio(self.nearest_neighbor.distance, optimal)
    }
}

/// One row of the brute-force timing table
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceTiming {
    /// Number of sites
    pub size: usize,
    /// Orderings a full search must evaluate, (n-1)!
    pub total_routes: Option<u128>,
    /// Wall-clock time of the search
    pub elapsed: Duration,
    /// Search result
    pub outcome: BruteForceOutcome,
}

/// One row of the nearest-neighbor timing table
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximationTiming {
    /// Number of sites
    pub size: usize,
    /// Wall-clock time of the greedy walk
    pub elapsed: Duration,
    /// Greedy tour
    pub tour: Tour,
}

/// One row of the side-by-side comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Number of sites
    pub size: usize,
    /// Exhaustive search result
    pub brute_force: BruteForceOutcome,
    /// Wall-clock time of the exhaustive search
    pub brute_force_elapsed: Duration,
    /// Greedy tour
    pub nearest_neighbor: Tour,
    /// Wall-clock time of the greedy walk
    pub nearest_neighbor_elapsed: Duration,
}

impl Comparison {
    /// Greedy length as a percentage of the optimum, if known
    pub fn quality(&self) -> Option<f64> {
        let optimal = self.brute_force.tour()?.distance;
        approximation_ratio(self.nearest_neighbor.distance, optimal)
    }
}

/// Run both solvers on each size to confirm they produce sensible tours
///
/// # Errors
///
/// Returns an error if a dataset cannot be loaded or a solver rejects it
pub fn test_small_cases<P: SearchProgress>(
    store: &DatasetStore,
    sizes: &[usize],
    config: &BruteForceConfig,
    mut make_progress: impl FnMut(usize) -> P,
) -> Result<Vec<SmallCaseResult>> {
    sizes
        .iter()
        .map(|&size| {
            let dataset = store.load(size)?;
            let brute_force =
                brute_force::solve(&dataset, config, &mut make_progress(dataset.len()))?;
            let nearest_neighbor = nearest_neighbor::solve(&dataset, config.start)?;
            info!(size, "verified small case");
            Ok(SmallCaseResult {
                size,
                brute_force,
                nearest_neighbor,
            })
        })
        .collect()
}

/// Time exhaustive search on increasing sizes
///
/// # Errors
///
/// Returns an error if a dataset cannot be loaded or the solver rejects it
pub fn time_brute_force<P: SearchProgress>(
    store: &DatasetStore,
    sizes: &[usize],
    config: &BruteForceConfig,
    mut make_progress: impl FnMut(usize) -> P,
) -> Result<Vec<BruteForceTiming>> {
    sizes
        .iter()
        .map(|&size| {
            let dataset = store.load(size)?;
            let mut progress = make_progress(dataset.len());
            let (outcome, elapsed) = timed(|| brute_force::solve(&dataset, config, &mut progress));
            let outcome = outcome?;
            info!(
                size,
                elapsed = ?elapsed,
                timed_out = outcome.timed_out(),
                "timed brute force"
            );
            Ok(BruteForceTiming {
                size,
                total_routes: route_count(dataset.len()),
                elapsed,
                outcome,
            })
        })
        .collect()
}

/// Time the greedy heuristic on increasing sizes
///
/// # Errors
///
/// Returns an error if a dataset cannot be loaded or the solver rejects it
pub fn time_approximation(
    store: &DatasetStore,
    sizes: &[usize],
) -> Result<Vec<ApproximationTiming>> {
    sizes
        .iter()
        .map(|&size| {
            let dataset = store.load(size)?;
            let (tour, elapsed) =
                timed(|| nearest_neighbor::solve(&dataset, DEFAULT_START_SITE));
            let tour = tour?;
            info!(size, elapsed = ?elapsed, "timed nearest neighbor");
            Ok(ApproximationTiming {
                size,
                elapsed,
                tour,
            })
        })
        .collect()
}

/// Run and time both solvers on each size
///
/// # Errors
///
/// Returns an error if a dataset cannot be loaded or a solver rejects it
pub fn compare_all<P: SearchProgress>(
    store: &DatasetStore,
    sizes: &[usize],
    config: &BruteForceConfig,
    mut make_progress: impl FnMut(usize) -> P,
) -> Result<Vec<Comparison>> {
    sizes
        .iter()
        .map(|&size| {
            let dataset = store.load(size)?;
            let mut progress = make_progress(dataset.len());
            let (brute_force, brute_force_elapsed) =
                timed(|| brute_force::solve(&dataset, config, &mut progress));
            let (nearest_neighbor, nearest_neighbor_elapsed) =
                timed(|| nearest_neighbor::solve(&dataset, config.start));
            Ok(Comparison {
                size,
                brute_force: brute_force?,
                brute_force_elapsed,
                nearest_neighbor: nearest_neighbor?,
                nearest_neighbor_elapsed,
            })
        })
        .collect()
}
