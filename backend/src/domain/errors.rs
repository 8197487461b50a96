//! Error taxonomy for the boarding core.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BoardingError {
    /// A persisted line could not be decoded. Skipped during load.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Reading or writing a data file failed. In-memory state is left untouched.
    #[error("Failed to persist {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No reservation found for {0}")]
    NotFound(String),

    #[error("Invalid {field}: '{value}'")]
    Validation { field: &'static str, value: String },
}

impl BoardingError {
    pub fn persistence(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        BoardingError::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        BoardingError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

pub type BoardingResult<T> = std::result::Result<T, BoardingError>;
