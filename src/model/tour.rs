use crate::io::error::{Result, invalid_parameter};

/// A closed tour: visits every site once and returns to the first
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Visiting order, starting at the start site; the return leg is implicit
    pub route: Vec<usize>,
    /// Total length including the return to the start
    pub distance: f64,
}

impl Tour {
    /// Build a tour, computing its closed length from the distance matrix
    ///
    /// # Errors
    ///
    /// Returns an error if the route references a site outside the matrix
    pub fn from_route(distances: &[Vec<f64>], route: Vec<usize>) -> Result<Self> {
        let distance = Self::closed_length(distances, &route)?;
        Ok(Self { route, distance })
    }

    /// Sum of consecutive legs plus the leg back to the first site
    ///
    /// An empty route has length zero.
    ///
    /// # Errors
    ///
    /// Returns an error if any index is outside the matrix
    pub fn closed_length(distances: &[Vec<f64>], route: &[usize]) -> Result<f64> {
        let Some(&first) = route.first() else {
            return Ok(0.0);
        };

        let mut total = 0.0;
        let legs = route
            .iter()
            .zip(route.iter().skip(1).chain(std::iter::once(&first)));
        for (&from, &to) in legs {
            total += distances
                .get(from)
                .and_then(|row| row.get(to))
                .copied()
                .ok_or_else(|| {
                    invalid_parameter(
                        "route",
                        &format!("{from}->{to}"),
                        &format!("leg leaves the {}-site distance matrix", distances.len()),
                    )
                })?;
        }
        Ok(total)
    }

    /// Number of sites visited
    pub const fn len(&self) -> usize {
        self.route.len()
    }

    /// Whether the tour visits no sites
    pub const fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Site the tour starts and ends at
    pub fn start(&self) -> Option<usize> {
        self.route.first().copied()
    }

    /// Whether the route visits each of `0..site_count` exactly once
    pub fn is_permutation_of(&self, site_count: usize) -> bool {
        if self.route.len() != site_count {
            return false;
        }
        let mut seen = vec![false; site_count];
        self.route.iter().all(|&site| {
            seen.get_mut(site)
                .is_some_and(|visited| !std::mem::replace(visited, true))
        })
    }
}
