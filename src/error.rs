//! Error types for chunkdir.

use std::fmt;
use std::path::PathBuf;

/// Errors reported by chunking, hashing, and persistence operations.
///
/// Validation variants are raised before any destructive action is taken;
/// `Io` wraps failures of the underlying filesystem calls unchanged.
#[derive(Debug)]
pub enum ChunkError {
    /// An underlying read/write/delete failed.
    Io(std::io::Error),

    /// A required input path does not exist.
    NotFound(PathBuf),

    /// The path exists but is not a regular file.
    NotAFile(PathBuf),

    /// The path exists but is not a directory.
    NotADirectory(PathBuf),

    /// Chunk size must be at least one byte.
    InvalidChunkSize,

    /// The source would produce more chunks than the naming scheme can index.
    TooManyChunks {
        /// Maximum number of chunks a single directory can hold.
        limit: usize,
    },

    /// A JSON document could not be parsed.
    Json {
        /// File the document was read from.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A binary-encoded value could not be decoded.
    Bin {
        /// File the value was read from.
        path: PathBuf,
        /// Underlying decode error.
        source: bincode::Error,
    },
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::Io(e) => write!(f, "io error: {}", e),
            ChunkError::NotFound(p) => write!(f, "path does not exist: {}", p.display()),
            ChunkError::NotAFile(p) => write!(f, "not a regular file: {}", p.display()),
            ChunkError::NotADirectory(p) => write!(f, "not a directory: {}", p.display()),
            ChunkError::InvalidChunkSize => write!(f, "chunk size must be greater than zero"),
            ChunkError::TooManyChunks { limit } => {
                write!(f, "source needs more than {} chunks", limit)
            }
            ChunkError::Json { path, source } => {
                write!(f, "cannot parse json from {}: {}", path.display(), source)
            }
            ChunkError::Bin { path, source } => {
                write!(f, "cannot decode data from {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChunkError::Io(e) => Some(e),
            ChunkError::Json { source, .. } => Some(source),
            ChunkError::Bin { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChunkError {
    fn from(e: std::io::Error) -> Self {
        ChunkError::Io(e)
    }
}
