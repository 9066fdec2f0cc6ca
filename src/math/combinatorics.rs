/// Exact factorial, `None` once the result no longer fits in `u128`
pub fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1_u128, u128::checked_mul)
}

/// Number of distinct closed tours through `site_count` sites with a fixed start
///
/// Fixing the start removes rotations, leaving (n-1)! orderings of the rest.
/// Both directions of each cycle are counted, matching what exhaustive search evaluates.
pub fn route_count(site_count: usize) -> Option<u128> {
    if site_count == 0 {
        return Some(0);
    }
    factorial(site_count - 1)
}

/// Advance `items` to the next lexicographic permutation in place
///
/// Returns `false` and leaves `items` untouched when it already holds the
/// last permutation (non-increasing order).
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let len = items.len();
    if len < 2 {
        return false;
    }

    // Longest non-increasing suffix starts right after the pivot
    let mut pivot = len - 1;
    while pivot > 0 && items.get(pivot - 1) >= items.get(pivot) {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = len - 1;
    while items.get(successor) <= items.get(pivot) {
        successor -= 1;
    }

    items.swap(pivot, successor);
    if let Some(suffix) = items.get_mut(pivot + 1..) {
        suffix.reverse();
    }
    true
}
