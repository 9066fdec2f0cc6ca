//! Error types and path context for dataset and solver operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for all solver and generator operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Dataset file is absent; the generator has not been run yet
    #[error(
        "Dataset '{}' not found. Run location_generator first to create the test datasets.",
        .path.display()
    )]
    DatasetNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Dataset file exists but is not valid dataset JSON
    #[error("Failed to parse dataset '{}': {source}", .path.display())]
    DatasetParse {
        /// Path to the dataset file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Dataset content violates a structural invariant
    #[error("Invalid dataset: {reason}")]
    InvalidDataset {
        /// Description of what's wrong with the dataset
        reason: String,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Dataset could not be serialized
    #[error("Failed to serialize dataset: {source}")]
    Serialization {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Report output could not be written
    #[error("Failed to write report: {source}")]
    Output {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Global log subscriber could not be installed
    #[error("Logger initialization failed: {reason}")]
    LoggerInit {
        /// Description of the failure
        reason: String,
    },
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Attaches the path and operation to raw I/O failures
pub trait ResultExt<T> {
    /// Convert an I/O error into [`SolverError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the I/O error with the path context applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SolverError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dataset error
pub fn invalid_dataset(reason: &impl ToString) -> SolverError {
    SolverError::InvalidDataset {
        reason: reason.to_string(),
    }
}
