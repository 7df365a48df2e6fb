use serde::{Deserialize, Serialize};
use std::fmt;

/// Order in which the reporter walks the result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderMode {
    /// Lexicographic order of the path keys.
    #[default]
    Sorted,
    /// Order of the expanded input list.
    Input,
}

/// What the aggregator does when a ratio's divisor is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioPolicy {
    /// Leave the ratio empty and keep going.
    #[default]
    Skip,
    /// Abort the run with [`EngineError::ZeroDivision`](crate::error::EngineError::ZeroDivision).
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioKind {
    CharsPerWord,
    CharsPerLine,
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CharsPerWord => "chars per word",
            Self::CharsPerLine => "chars per line",
        })
    }
}

/// How a byte source pulls data off disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadMode {
    /// One `read` of the whole file, then iterate the buffer.
    Whole,
    /// Fixed-size chunks of the given size.
    Chunked(usize),
}

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

impl Default for ReadMode {
    fn default() -> Self {
        Self::Chunked(DEFAULT_CHUNK_SIZE)
    }
}
