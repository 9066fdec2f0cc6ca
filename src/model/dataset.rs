//! Named collection of sites with the pairwise distance matrix

use crate::io::configuration::COORDINATE_DECIMALS;
use crate::io::error::{Result, invalid_dataset};
use crate::math::geometry::round_to;
use crate::model::site::Site;
use serde::{Deserialize, Serialize};

/// Ordered sites plus the square matrix of distances between them
///
/// Field names match the on-disk JSON layout written by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Number of sites, kept alongside the list for readers of the raw file
    pub num_locations: usize,
    /// Sites in index order; `locations[i].id == i`
    pub locations: Vec<Site>,
    /// `distances[i][j]` is the distance from site `i` to site `j`
    pub distances: Vec<Vec<f64>>,
}

impl Dataset {
    /// Build a dataset from sites, computing the rounded distance matrix
    pub fn from_sites(sites: Vec<Site>) -> Self {
        let distances = sites
            .iter()
            .enumerate()
            .map(|(i, from)| {
                sites
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            0.0
                        } else {
                            round_to(from.distance_to(to), COORDINATE_DECIMALS)
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            num_locations: sites.len(),
            locations: sites,
            distances,
        }
    }

    /// Number of sites
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the dataset has no sites
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Bounds-checked distance lookup
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.distances.get(from)?.get(to).copied()
    }

    /// Check the structural invariants a loaded dataset must satisfy
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidDataset`] if the dataset is empty,
    /// the declared count disagrees with the site list, the matrix is not
    /// square, or any coordinate or distance is not a finite non-negative number
    pub fn validate(&self) -> Result<()> {
        let n = self.locations.len();
        if n == 0 {
            return Err(invalid_dataset(&"dataset contains no sites"));
        }
        if self.num_locations != n {
            return Err(invalid_dataset(&format!(
                "num_locations is {} but {n} sites are listed",
                self.num_locations
            )));
        }

        for (index, site) in self.locations.iter().enumerate() {
            if site.id != index {
                return Err(invalid_dataset(&format!(
                    "site at position {index} has id {}",
                    site.id
                )));
            }
            if !site.has_valid_coordinates() {
                return Err(invalid_dataset(&format!(
                    "site {index} has non-finite coordinates ({}, {})",
                    site.x, site.y
                )));
            }
        }

        if self.distances.len() != n {
            return Err(invalid_dataset(&format!(
                "distance matrix has {} rows, expected {n}",
                self.distances.len()
            )));
        }
        for (i, row) in self.distances.iter().enumerate() {
            if row.len() != n {
                return Err(invalid_dataset(&format!(
                    "distance row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some((j, value)) = row
                .iter()
                .enumerate()
                .find(|(_, d)| !d.is_finite() || **d < 0.0)
            {
                return Err(invalid_dataset(&format!(
                    "distance from {i} to {j} is {value}"
                )));
            }
        }

        Ok(())
    }
}
