use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV appears to have no header")]
    MissingHeader,
    #[error("CSV header has none of the component columns {expected:?}")]
    MissingComponentField { expected: Vec<String> },
    #[error("no module ranges found after '{marker}'")]
    EmptyManifest { marker: String },
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl ValidatorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ValidatorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
