//! Mathematical utilities for route counting and planar distances

/// Factorial route counts for exhaustive search
pub mod combinatorics;
/// Euclidean distance and fixed-precision rounding
pub mod geometry;
