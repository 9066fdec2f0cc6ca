//! Exact versus heuristic solutions to the Traveling Salesman Problem
//!
//! Synthetic emergency site datasets are generated once and written as JSON.
//! The solver then runs an exhaustive permutation search and a greedy
//! nearest-neighbor walk over them, timing both and reporting how far the
//! heuristic lands from the optimum.

#![forbid(unsafe_code)]

/// Experiment drivers producing timing and quality rows
pub mod experiment;
/// Seeded synthetic dataset generation
pub mod generator;
/// Input/output operations and error handling
pub mod io;
/// Route counting, permutation stepping and planar geometry
pub mod math;
/// Sites, datasets and tours
pub mod model;
/// Brute-force and nearest-neighbor solvers
pub mod solver;

pub use io::error::{Result, SolverError};
