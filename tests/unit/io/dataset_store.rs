//! Tests for dataset file naming, persistence and validation on load

#[cfg(test)]
mod tests {
    use emergency_tsp::SolverError;
    use emergency_tsp::generator::generate_dataset;
    use emergency_tsp::io::dataset_store::DatasetStore;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests file names follow sites_<n>.json under the store directory
    // Verified by dropping the size from the file name
    #[test]
    fn test_path_for() {
        let store = DatasetStore::new("some/dir");
        assert_eq!(store.path_for(8), Path::new("some/dir/sites_8.json"));
        assert_eq!(DatasetStore::default().dir(), Path::new("data"));
    }

    // Tests a saved dataset loads back unchanged
    // Verified by saving compact JSON without the distance matrix
    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path().join("nested"));
        let dataset = generate_dataset(8, 42);

        let path = store.save(&dataset).unwrap();
        assert_eq!(path, store.path_for(8));
        assert!(path.is_file());

        let loaded = store.load(8).unwrap();
        assert_eq!(loaded, dataset);
    }

    // Tests the file uses the documented field names and pretty layout
    // Verified by serializing with compact output
    #[test]
    fn test_saved_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path());
        let path = store.save(&generate_dataset(5, 42)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("\"num_locations\": 5"));
        assert!(content.contains("\"locations\""));
        assert!(content.contains("\"distances\""));
        assert!(content.lines().count() > 10);
    }

    // Tests missing files produce the generator hint
    // Verified by reading the file without checking it exists
    #[test]
    fn test_load_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path());

        match store.load(12) {
            Err(SolverError::DatasetNotFound { path }) => {
                assert_eq!(path, store.path_for(12));
            }
            other => unreachable!("Expected DatasetNotFound, got {other:?}"),
        }
    }

    // Tests the sentinel check before any experiment runs
    // Verified by checking the directory instead of the sentinel file
    #[test]
    fn test_ensure_available() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path());

        assert!(matches!(
            store.ensure_available(),
            Err(SolverError::DatasetNotFound { .. })
        ));

        store.save(&generate_dataset(5, 1)).unwrap();
        assert!(store.ensure_available().is_ok());
    }

    // Tests malformed JSON is reported with its path
    // Verified by mapping parse failures to DatasetNotFound
    #[test]
    fn test_load_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path());
        fs::write(store.path_for(5), "{ not json").unwrap();

        match store.load(5) {
            Err(SolverError::DatasetParse { path, .. }) => {
                assert_eq!(path, store.path_for(5));
            }
            other => unreachable!("Expected DatasetParse, got {other:?}"),
        }
    }

    // Tests structurally inconsistent files are rejected on load
    // Verified by skipping validation after parsing
    #[test]
    fn test_load_inconsistent() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path());
        fs::write(
            store.path_for(2),
            r#"{
  "num_locations": 2,
  "locations": [ { "id": 0, "name": "Hospital 1", "x": 1.0, "y": 2.0 } ],
  "distances": [ [0.0] ]
}"#,
        )
        .unwrap();

        assert!(matches!(
            store.load(2),
            Err(SolverError::InvalidDataset { .. })
        ));
    }

    // Tests a file whose site count disagrees with its name is rejected
    // Verified by trusting the file name without checking the count
    #[test]
    fn test_load_mislabeled() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path());
        let json = serde_json::to_string(&generate_dataset(5, 42)).unwrap();
        fs::write(store.path_for(8), json).unwrap();

        match store.load(8) {
            Err(SolverError::InvalidDataset { reason }) => {
                assert!(reason.contains("holds 5 sites, expected 8"));
            }
            other => unreachable!("Expected InvalidDataset, got {other:?}"),
        }
    }
}
