use crate::io::configuration::{COORDINATE_DECIMALS, GRID_EXTENT};
use crate::math::geometry::round_to;
use crate::model::{Dataset, Site, SiteKind};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Scatter `count` sites uniformly over the square grid
///
/// Coordinates are drawn from `[0, GRID_EXTENT)` and rounded to
/// [`COORDINATE_DECIMALS`] places, so they lie in `[0, GRID_EXTENT]`.
/// The same seed always yields the same sites, and a smaller count yields a
/// prefix of a larger one.
pub fn generate_sites(count: usize, seed: u64) -> Vec<Site> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            let x = rng.random_range(0.0..GRID_EXTENT);
            let y = rng.random_range(0.0..GRID_EXTENT);
            let kind = SiteKind::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or(SiteKind::Hospital);
            Site::new(
                id,
                kind,
                round_to(x, COORDINATE_DECIMALS),
                round_to(y, COORDINATE_DECIMALS),
            )
        })
        .collect()
}

/// Generate sites and their distance matrix in one step
pub fn generate_dataset(count: usize, seed: u64) -> Dataset {
    Dataset::from_sites(generate_sites(count, seed))
}
