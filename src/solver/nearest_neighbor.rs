use crate::io::error::{Result, invalid_parameter};
use crate::model::{Dataset, Tour};

/// Build a tour by always travelling to the closest unvisited site
///
/// Ties go to the lowest site index. The tour returns to `start` at the end.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or `start` is not a site index
pub fn solve(dataset: &Dataset, start: usize) -> Result<Tour> {
    dataset.validate()?;
    let n = dataset.len();
    if start >= n {
        return Err(invalid_parameter(
            "start",
            &start,
            &format!("dataset has {n} sites"),
        ));
    }

    let mut visited = vec![false; n];
    if let Some(flag) = visited.get_mut(start) {
        *flag = true;
    }
    let mut route = Vec::with_capacity(n);
    route.push(start);
    let mut current = start;

    while route.len() < n {
        let nearest = (0..n)
            .filter(|&candidate| !visited.get(candidate).copied().unwrap_or(true))
            .map(|candidate| {
                let distance = dataset.distance(current, candidate).unwrap_or(f64::INFINITY);
                (candidate, distance)
            })
            .reduce(|best, next| if next.1 < best.1 { next } else { best });

        let Some((next, _)) = nearest else {
            break;
        };
        if let Some(flag) = visited.get_mut(next) {
            *flag = true;
        }
        route.push(next);
        current = next;
    }

    Tour::from_route(&dataset.distances, route)
}
