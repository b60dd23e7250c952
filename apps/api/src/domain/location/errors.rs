use std::path::PathBuf;
use thiserror::Error;

/// A static dataset could not be loaded.
///
/// This points at a packaging or deployment defect; callers surface it
/// instead of retrying.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset {path} contains malformed pincode {pincode:?}")]
    InvalidPincode { path: PathBuf, pincode: String },
    #[error("dataset {path} contains duplicate key {key:?}")]
    DuplicateKey { path: PathBuf, key: String },
}
