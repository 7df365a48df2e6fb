use std::path::PathBuf;

use thiserror::Error;

use crate::options::RatioKind;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Cannot compute {ratio} for '{path}': divisor is zero")]
    ZeroDivision { path: PathBuf, ratio: RatioKind },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    #[error("A worker thread panicked")]
    WorkerPanicked,

    #[error("Scoring of '{path}' was cancelled")]
    Cancelled { path: PathBuf },
}

impl EngineError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// True for errors that only exist because some other task failed first.
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
