//! Core data model: sites, datasets and tours
//!
//! A dataset is generated once and read once per solver run; tours are
//! produced by the solvers and never mutated afterwards.

/// Dataset of sites with a precomputed distance matrix
pub mod dataset;
/// Emergency site coordinates and categories
pub mod site;
/// Closed tours and their lengths
pub mod tour;

pub use dataset::Dataset;
pub use site::{Site, SiteKind};
pub use tour::Tour;
