use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the relocation tool
#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("File operation failed: {message}")]
    FileOperation { message: String, path: PathBuf },
}

impl RelocateError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new file operation error
    pub fn file_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileOperation {
            message: message.into(),
            path: path.into(),
        }
    }

    /// The path involved in the failure, when one is known
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => path.as_ref(),
            Self::FileOperation { path, .. } => Some(path),
        }
    }
}

/// Result type alias using RelocateError
pub type Result<T> = std::result::Result<T, RelocateError>;
