//! Synthetic emergency site datasets

/// Seeded random site placement
pub mod sites;

pub use sites::{generate_dataset, generate_sites};
