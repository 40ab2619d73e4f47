#![deny(unsafe_code)]

use std::path::PathBuf;

use shapefit_model::Unit;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported size chart format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("size chart {path} is in {actual}, expected {expected}")]
    UnitMismatch {
        path: PathBuf,
        expected: Unit,
        actual: Unit,
    },

    #[error("size chart {path} has no entries")]
    EmptyChart { path: PathBuf },

    #[error("invalid entry in {path} at row {row}: {message}")]
    InvalidEntry {
        path: PathBuf,
        row: usize,
        message: String,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
