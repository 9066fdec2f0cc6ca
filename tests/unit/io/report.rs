//! Tests for the fixed-width report tables

#[cfg(test)]
mod tests {
    use emergency_tsp::experiment::{
        ApproximationTiming, BruteForceTiming, Comparison, SmallCaseResult,
    };
    use emergency_tsp::io::report::{
        group_thousands, write_approximation_timings, write_banner, write_brute_force_timings,
        write_comparisons, write_small_cases,
    };
    use emergency_tsp::model::Tour;
    use emergency_tsp::solver::brute_force::BruteForceOutcome;
    use std::time::Duration;

    fn tour(distance: f64) -> Tour {
        Tour {
            route: vec![0, 1, 2, 3, 4],
            distance,
        }
    }

    fn complete(distance: f64, routes_checked: u64) -> BruteForceOutcome {
        BruteForceOutcome::Complete {
            tour: tour(distance),
            routes_checked,
        }
    }

    fn timed_out(routes_checked: u64) -> BruteForceOutcome {
        BruteForceOutcome::TimedOut {
            routes_checked,
            elapsed: Duration::from_secs(60),
        }
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    // Tests thousands separators
    // Verified by grouping from the left
    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(40_320), "40,320");
        assert_eq!(group_thousands(87_178_291_200), "87,178,291,200");
    }

    // Tests the banner is framed by 70 `=` characters
    // Verified by shortening the rule
    #[test]
    fn test_banner() {
        let output = render(|out| write_banner(out, "TITLE"));
        let rule = "=".repeat(70);
        assert_eq!(output, format!("\n{rule}\nTITLE\n{rule}\n"));
    }

    // Tests small case lines including quality
    // Verified by printing the inverse ratio
    #[test]
    fn test_small_cases_output() {
        let results = vec![SmallCaseResult {
            size: 5,
            brute_force: complete(200.0, 24),
            nearest_neighbor: tour(250.0),
        }];
        let output = render(|out| write_small_cases(out, &results));

        assert!(output.contains("TESTING: Small Cases (Verifying Correctness)"));
        assert!(output.contains("Testing 5 locations..."));
        assert!(output.contains("  Brute Force: Distance = 200.00"));
        assert!(output.contains("  Nearest Neighbor: Distance = 250.00"));
        assert!(output.contains("  Approximation Quality: 125.0% of optimal"));
    }

    // Tests a timed out small case reports N/A quality
    // Verified by dividing by an infinite optimum
    #[test]
    fn test_small_cases_timeout_output() {
        let results = vec![SmallCaseResult {
            size: 10,
            brute_force: timed_out(12_345),
            nearest_neighbor: tour(300.0),
        }];
        let output = render(|out| write_small_cases(out, &results));

        assert!(output.contains("TIMEOUT after checking 12,345 routes"));
        assert!(output.contains("Approximation Quality: N/A"));
    }

    // Tests brute-force rows for complete and timed out searches
    // Verified by swapping the status labels
    #[test]
    fn test_brute_force_timings_output() {
        let rows = vec![
            BruteForceTiming {
                size: 5,
                total_routes: Some(24),
                elapsed: Duration::from_millis(1500),
                outcome: complete(123.456, 24),
            },
            BruteForceTiming {
                size: 15,
                total_routes: Some(87_178_291_200),
                elapsed: Duration::from_secs(60),
                outcome: timed_out(1_000_000),
            },
        ];
        let output = render(|out| {
            write_brute_force_timings(out, &rows, Some(Duration::from_secs(60)))
        });

        assert!(output.contains("timeout at 60 seconds"));
        assert!(output.contains("Size   Routes          Time (s)     Distance     Status"));
        assert!(output.contains("5      24              1.500        123.46       Complete"));
        assert!(output.contains("15     87,178,291,200  60.000       N/A          TIMEOUT"));
    }

    // Tests approximation rows use six decimals for time
    // Verified by printing milliseconds
    #[test]
    fn test_approximation_timings_output() {
        let rows = vec![ApproximationTiming {
            size: 20,
            elapsed: Duration::from_micros(42),
            tour: tour(411.5),
        }];
        let output = render(|out| write_approximation_timings(out, &rows));

        assert!(output.contains("TIMING: Nearest Neighbor Approximation"));
        assert!(output.contains(&"-".repeat(40)));
        assert!(output.contains("20     0.000042     411.50"));
    }

    // Tests comparison rows and the closing notes
    // Verified by omitting the timeout row
    #[test]
    fn test_comparisons_output() {
        let rows = vec![
            Comparison {
                size: 8,
                brute_force: complete(100.0, 5040),
                brute_force_elapsed: Duration::from_millis(250),
                nearest_neighbor: tour(110.0),
                nearest_neighbor_elapsed: Duration::from_micros(5),
            },
            Comparison {
                size: 10,
                brute_force: timed_out(99),
                brute_force_elapsed: Duration::from_secs(60),
                nearest_neighbor: tour(150.0),
                nearest_neighbor_elapsed: Duration::from_micros(7),
            },
        ];
        let output = render(|out| write_comparisons(out, &rows));

        assert!(output.contains("COMPARISON: Brute Force vs Nearest Neighbor"));
        assert!(output.contains("8      100.00       110.00       110.0          0.250          0.000005"));
        assert!(output.contains("10     TIMEOUT      150.00       N/A            TIMEOUT        0.000007"));
        assert!(output.contains("Brute force becomes impractical beyond 12-15 locations."));
    }
}
