//! The four solver experiments, returning rows for [`crate::io::report`]

/// Experiment drivers and their result rows
pub mod runs;
/// Wall-clock measurement of a single call
pub mod timing;

pub use runs::{
    ApproximationTiming, BruteForceTiming, Comparison, SmallCaseResult, compare_all,
    test_small_cases, time_approximation, time_brute_force,
};
pub use timing::timed;
