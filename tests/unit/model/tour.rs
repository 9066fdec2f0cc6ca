//! Tests for closed tour length and permutation completeness

#[cfg(test)]
mod tests {
    use emergency_tsp::SolverError;
    use emergency_tsp::model::Tour;

    fn matrix() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 5.0, 10.0],
            vec![5.0, 0.0, 5.0],
            vec![10.0, 5.0, 0.0],
        ]
    }

    // Tests the return leg is included in the length
    // Verified by dropping the closing leg
    #[test]
    fn test_closed_length_includes_return() {
        let length = Tour::closed_length(&matrix(), &[0, 1, 2]).unwrap();
        assert!((length - 20.0).abs() < f64::EPSILON);

        let length = Tour::closed_length(&matrix(), &[0, 2]).unwrap();
        assert!((length - 20.0).abs() < f64::EPSILON);
    }

    // Tests degenerate routes
    // Verified by returning an error for empty routes
    #[test]
    fn test_closed_length_degenerate() {
        assert!(Tour::closed_length(&matrix(), &[]).unwrap().abs() < f64::EPSILON);
        assert!(Tour::closed_length(&matrix(), &[1]).unwrap().abs() < f64::EPSILON);
    }

    // Tests out-of-range legs are reported
    // Verified by treating missing legs as zero
    #[test]
    fn test_closed_length_out_of_range() {
        let result = Tour::closed_length(&matrix(), &[0, 3]);
        match result {
            Err(SolverError::InvalidParameter { parameter, value, .. }) => {
                assert_eq!(parameter, "route");
                assert_eq!(value, "0->3");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests from_route stores the computed distance
    // Verified by storing the open-path length
    #[test]
    fn test_from_route() {
        let tour = Tour::from_route(&matrix(), vec![2, 1, 0]).unwrap();
        assert_eq!(tour.route, vec![2, 1, 0]);
        assert_eq!(tour.start(), Some(2));
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
        assert!((tour.distance - 20.0).abs() < f64::EPSILON);
    }

    // Tests permutation completeness
    // Verified by only comparing lengths
    #[test]
    fn test_is_permutation_of() {
        let tour = |route: Vec<usize>| Tour {
            route,
            distance: 0.0,
        };

        assert!(tour(vec![0, 2, 1]).is_permutation_of(3));
        assert!(tour(vec![]).is_permutation_of(0));
        assert!(!tour(vec![0, 0, 1]).is_permutation_of(3));
        assert!(!tour(vec![0, 1]).is_permutation_of(3));
        assert!(!tour(vec![0, 1, 3]).is_permutation_of(3));
    }
}
