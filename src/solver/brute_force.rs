use crate::io::configuration::{
    DEFAULT_START_SITE, DEFAULT_TIMEOUT_SECS, PROGRESS_UPDATE_INTERVAL, TIMEOUT_CHECK_INTERVAL,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::combinatorics::{next_permutation, route_count};
use crate::model::{Dataset, Tour};
use crate::solver::SearchProgress;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Parameters for exhaustive search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForceConfig {
    /// Site every candidate tour starts from
    pub start: usize,
    /// Give up after this long; `None` searches to completion
    pub timeout: Option<Duration>,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_SITE,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

/// Result of an exhaustive search
#[derive(Debug, Clone, PartialEq)]
pub enum BruteForceOutcome {
    /// Every ordering was evaluated
    Complete {
        /// Shortest tour found; the first one in lexicographic order on ties
        tour: Tour,
        /// Orderings evaluated, always (n-1)!
        routes_checked: u64,
    },
    /// The deadline passed before the search finished
    TimedOut {
        /// Orderings evaluated before giving up
        routes_checked: u64,
        /// Time spent searching
        elapsed: Duration,
    },
}

impl BruteForceOutcome {
    /// Optimal tour, if the search completed
    pub const fn tour(&self) -> Option<&Tour> {
        match self {
            Self::Complete { tour, .. } => Some(tour),
            Self::TimedOut { .. } => None,
        }
    }

    /// Orderings evaluated
    pub const fn routes_checked(&self) -> u64 {
        match self {
            Self::Complete { routes_checked, .. } | Self::TimedOut { routes_checked, .. } => {
                *routes_checked
            }
        }
    }

    /// Whether the deadline cut the search short
    pub const fn timed_out(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }
}

/// Find the optimal tour by evaluating every ordering of the non-start sites
///
/// Orderings are enumerated in lexicographic order and only a strictly
/// shorter tour replaces the current best. The deadline is polled every
/// [`TIMEOUT_CHECK_INTERVAL`] routes.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or the start is not a site index
pub fn solve(
    dataset: &Dataset,
    config: &BruteForceConfig,
    progress: &mut impl SearchProgress,
) -> Result<BruteForceOutcome> {
    dataset.validate()?;
    let n = dataset.len();
    let start = config.start;
    if start >= n {
        return Err(invalid_parameter(
            "start",
            &start,
            &format!("dataset has {n} sites"),
        ));
    }

    let total_routes = route_count(n);
    debug!(sites = n, ?total_routes, "starting exhaustive search");
    progress.begin(total_routes);

    let mut order: Vec<usize> = (0..n).filter(|&site| site != start).collect();
    let mut best_order = order.clone();
    let mut best_distance = f64::INFINITY;
    let mut routes_checked: u64 = 0;
    let started = Instant::now();

    loop {
        if let Some(timeout) = config.timeout {
            if routes_checked % TIMEOUT_CHECK_INTERVAL == 0 && started.elapsed() > timeout {
                let elapsed = started.elapsed();
                progress.end();
                warn!(sites = n, routes_checked, "exhaustive search timed out");
                return Ok(BruteForceOutcome::TimedOut {
                    routes_checked,
                    elapsed,
                });
            }
        }

        let distance = cycle_length(dataset, start, &order);
        if distance < best_distance {
            best_distance = distance;
            best_order.clone_from(&order);
        }
        routes_checked += 1;

        if routes_checked % PROGRESS_UPDATE_INTERVAL == 0 {
            progress.advance(routes_checked);
        }
        if !next_permutation(&mut order) {
            break;
        }
    }

    progress.advance(routes_checked);
    progress.end();

    let mut route = Vec::with_capacity(n);
    route.push(start);
    route.extend(best_order);
    let tour = Tour::from_route(&dataset.distances, route)?;
    debug!(
        sites = n,
        routes_checked,
        distance = tour.distance,
        "exhaustive search complete"
    );

    Ok(BruteForceOutcome::Complete {
        tour,
        routes_checked,
    })
}

/// Length of `start -> order... -> start` on a validated dataset
fn cycle_length(dataset: &Dataset, start: usize, order: &[usize]) -> f64 {
    let leg = |from: usize, to: usize| dataset.distance(from, to).unwrap_or(f64::INFINITY);

    let mut total = 0.0;
    let mut current = start;
    for &next in order {
        total += leg(current, next);
        current = next;
    }
    total + leg(current, start)
}
