//! Error types for chunkwise.

/// Errors that can occur while configuring a chunker.
///
/// Chunking itself never fails: empty input yields no chunks and unknown
/// languages fall back to whole-file chunks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),
}

/// Result type for chunkwise operations.
pub type Result<T> = std::result::Result<T, Error>;
