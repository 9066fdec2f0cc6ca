//! Reads and writes `sites_<n>.json` dataset files in one directory

use crate::io::configuration::{
    DATASET_FILE_EXTENSION, DATASET_FILE_PREFIX, DEFAULT_DATA_DIR, SENTINEL_DATASET_SIZE,
};
use crate::io::error::{Result, ResultExt, SolverError, invalid_dataset};
use crate::model::Dataset;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory of generated datasets, addressed by site count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStore {
    dir: PathBuf,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl DatasetStore {
    /// Store rooted at `dir`; nothing is touched until a read or write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the dataset with `size` sites
    pub fn path_for(&self, size: usize) -> PathBuf {
        self.dir.join(format!(
            "{DATASET_FILE_PREFIX}{size}.{DATASET_FILE_EXTENSION}"
        ))
    }

    /// Fail early if the generator has never been run against this directory
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DatasetNotFound`] if the sentinel dataset is missing
    pub fn ensure_available(&self) -> Result<()> {
        let path = self.path_for(SENTINEL_DATASET_SIZE);
        if path.is_file() {
            Ok(())
        } else {
            Err(SolverError::DatasetNotFound { path })
        }
    }

    /// Load and validate the dataset with `size` sites
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not dataset JSON,
    /// fails validation, or holds a different number of sites than `size`
    pub fn load(&self, size: usize) -> Result<Dataset> {
        let path = self.path_for(size);
        if !path.is_file() {
            return Err(SolverError::DatasetNotFound { path });
        }

        let content = fs::read_to_string(&path).with_path(&path, "read")?;
        let dataset: Dataset = serde_json::from_str(&content)
            .map_err(|source| SolverError::DatasetParse {
                path: path.clone(),
                source,
            })?;
        dataset.validate()?;
        if dataset.len() != size {
            return Err(invalid_dataset(&format!(
                "'{}' holds {} sites, expected {size}",
                path.display(),
                dataset.len()
            )));
        }

        debug!(path = %path.display(), sites = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Write `dataset` as pretty-printed JSON, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written
    pub fn save(&self, dataset: &Dataset) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_path(&self.dir, "create directory")?;

        let path = self.path_for(dataset.len());
        let json = serde_json::to_string_pretty(dataset)?;
        fs::write(&path, json).with_path(&path, "write")?;

        debug!(path = %path.display(), sites = dataset.len(), "saved dataset");
        Ok(path)
    }
}
