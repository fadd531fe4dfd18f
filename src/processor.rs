//! One entry point for the cleaning, chunking and metadata operations.

use serde_json::Value;
use tracing::info;

use crate::{clean, code, metadata, Chunk, ChunkerConfig, Metadata, Result, SentenceChunker};

/// Prepares repository content for embedding under one configuration.
///
/// ```rust
/// use chunkwise::DataProcessor;
///
/// let processor = DataProcessor::new(300, 50).unwrap();
///
/// let text = processor.clean_text("  Install it.\n\nThen run it.  ");
/// let metadata =
///     processor.create_metadata("doc", "acme/repo", "README.md", [("source", "readme")]);
/// let chunks = processor.split_text(&text, &metadata);
///
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].content, "Install it. Then run it.");
/// assert_eq!(chunks[0].chunk_id, "readme_0");
/// assert_eq!(chunks[0].metadata["repository"], "acme/repo");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataProcessor {
    chunker: SentenceChunker,
}

impl DataProcessor {
    /// Create a processor with the given prose chunk size and overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size == 0`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::from_config(ChunkerConfig::new(chunk_size, chunk_overlap)?)
    }

    /// Create a processor from a (possibly deserialized) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            chunker: SentenceChunker::new(config),
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ChunkerConfig {
        self.chunker.config()
    }

    /// See [`clean_text`](crate::clean_text).
    #[must_use]
    pub fn clean_text(&self, text: &str) -> String {
        clean::clean_text(text)
    }

    /// See [`clean_code`](crate::clean_code).
    #[must_use]
    pub fn clean_code(&self, code: &str, language: &str) -> String {
        clean::clean_code(code, language)
    }

    /// Split prose into overlapping sentence chunks.
    #[must_use]
    pub fn split_text(&self, text: &str, metadata: &Metadata) -> Vec<Chunk> {
        let chunks = self.chunker.split_text(text, metadata);
        info!(chunks = chunks.len(), "split text");
        chunks
    }

    /// Split source code into one chunk per function.
    #[must_use]
    pub fn split_code_by_function(&self, code: &str, language: &str) -> Vec<Chunk> {
        let chunks = code::split_code_by_function(code, language);
        info!(chunks = chunks.len(), language, "split code");
        chunks
    }

    /// See [`create_metadata`](crate::create_metadata).
    pub fn create_metadata<I, K, V>(
        &self,
        source_type: &str,
        repo_name: &str,
        file_path: &str,
        extra: I,
    ) -> Metadata
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        metadata::create_metadata(source_type, repo_name, file_path, extra)
    }
}
