use std::path::PathBuf;
use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("File not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("An error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report: {0}")]
    Report(std::io::Error),
}

impl TreeError {
    /// Build the error for a failed open, keeping "not found" apart from everything else
    pub fn from_open(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            TreeError::SourceNotFound { path: path.into() }
        } else {
            TreeError::Io(err)
        }
    }

    pub fn is_source_not_found(&self) -> bool {
        matches!(self, TreeError::SourceNotFound { .. })
    }
}
