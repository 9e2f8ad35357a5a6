pub mod reference;
pub mod stats;

use std::path::Path;
use thiserror::Error;

/// Failure loading a local static dataset. Unlike feed fetches, these
/// are fatal at load time; team metadata is never served partially.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn read_dataset(path: &Path) -> Result<Vec<u8>, DatasetError> {
    std::fs::read(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })
}
