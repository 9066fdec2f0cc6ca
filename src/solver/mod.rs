//! Exact and heuristic TSP solvers over a [`crate::model::Dataset`]
//!
//! Both solvers fix the start site, so tours are directly comparable:
//! the brute-force optimum is a lower bound for every nearest-neighbor tour.

/// Exhaustive permutation search with an optional deadline
pub mod brute_force;
/// Greedy nearest unvisited site heuristic
pub mod nearest_neighbor;

use std::fmt;

/// The two algorithms under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    /// Exact search over all (n-1)! orderings
    BruteForce,
    /// Greedy O(n²) walk
    NearestNeighbor,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BruteForce => "Brute Force",
            Self::NearestNeighbor => "Nearest Neighbor",
        })
    }
}

/// Observer notified while an exhaustive search runs
///
/// The unit type is the silent observer.
pub trait SearchProgress {
    /// Search is starting; `total_routes` is `None` if it overflows `u128`
    fn begin(&mut self, total_routes: Option<u128>);
    /// Periodic update with the number of routes evaluated so far
    fn advance(&mut self, routes_checked: u64);
    /// Search finished or gave up
    fn end(&mut self);
}

impl SearchProgress for () {
    fn begin(&mut self, _total_routes: Option<u128>) {}
    fn advance(&mut self, _routes_checked: u64) {}
    fn end(&mut self) {}
}

/// Approximate tour length as a percentage of the optimum
///
/// Returns `None` when the optimum is not positive (one-site datasets).
pub fn approximation_ratio(approximate: f64, optimal: f64) -> Option<f64> {
    (optimal > 0.0).then(|| approximate / optimal * 100.0)
}
