//! # chunkwise
//!
//! Chunking of GitHub repository content (issues, pull requests, docs,
//! source files) for embedding and semantic search.
//!
//! ## The Problem
//!
//! A crawled repository is a pile of text of wildly different shapes: a
//! one-line issue, a 3,000-word README, a 900-line Python module. An
//! embedding model wants pieces that are small enough to embed and large
//! enough to mean something, and a vector store wants each piece labelled
//! so results can be filtered by repository, file, or source type.
//!
//! This crate sits between the crawler and the embedding step:
//!
//! ```text
//! raw text + metadata ─► clean ─► chunk ─► [Chunk { content, metadata, chunk_id, ... }]
//!                                                  │
//!                                                  ▼
//!                                      embedding model ─► vector store
//! ```
//!
//! ## Prose: Sentences With Overlap
//!
//! Whole sentences are packed into chunks up to a character budget. When a
//! chunk closes, its last sentence(s) are repeated at the start of the next
//! one, so a question whose answer straddles a boundary still finds both
//! halves together:
//!
//! ```text
//! Chunk 0: "S1 S2 S3"
//! Chunk 1: "S3 S4 S5"   <- S3 carried over
//! Chunk 2: "S5 S6"      <- S5 carried over
//! ```
//!
//! ## Code: One Function Per Chunk
//!
//! Python sources are cut at `def` headings and keep the indented body.
//! Other languages are kept whole as a single file chunk.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkwise::{create_metadata, DataProcessor};
//!
//! let processor = DataProcessor::new(200, 50).unwrap();
//!
//! let readme = "chunkwise splits text. It keeps sentences whole. It repeats context.";
//! let metadata = create_metadata("doc", "acme/repo", "README.md", [("source", "readme")]);
//! let chunks = processor.split_text(&processor.clean_text(readme), &metadata);
//! assert_eq!(chunks[0].chunk_id, "readme_0");
//!
//! let code = "def hello():\n    print('hi')\n";
//! let chunks = processor.split_code_by_function(code, "python");
//! assert_eq!(chunks[0].chunk_id, "func_0");
//! ```
//!
//! ## Logging
//!
//! Chunk counts are reported through [`tracing`]. Install a subscriber in
//! the application to see them; the library never installs one.

mod chunk;
mod clean;
mod code;
mod config;
mod error;
pub mod extract;
mod metadata;
mod processor;
mod sentence;

pub use chunk::Chunk;
pub use clean::{clean_code, clean_text};
pub use code::{
    language_for_extension, language_for_path, split_code_by_function, CodeChunker, CodeLanguage,
    CodeUnit,
};
pub use config::{ChunkerConfig, SentenceBoundary, AVERAGE_SENTENCE_CHARS};
pub use error::{Error, Result};
pub use metadata::{create_metadata, Metadata, UNKNOWN_SOURCE};
pub use processor::DataProcessor;
pub use sentence::{split_sentences, SentenceChunker};

/// A chunking strategy.
///
/// Prose and code chunkers implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use chunkwise::{Chunk, Chunker, ChunkerConfig, CodeChunker, Metadata, SentenceChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<Chunk> {
///     chunker.chunk(text, &Metadata::new())
/// }
///
/// let prose = SentenceChunker::new(ChunkerConfig::default());
/// let code = CodeChunker::new("python");
///
/// let chunks1 = chunk_document(&prose, "Hello world. This is a test.");
/// let chunks2 = chunk_document(&code, "def f():\n    pass\n");
/// assert_eq!(chunks1.len(), 1);
/// assert_eq!(chunks2.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks, each carrying a copy of `metadata`.
    ///
    /// Chunks are returned in document order with `chunk_index` values
    /// `0, 1, 2, …`.
    fn chunk(&self, text: &str, metadata: &Metadata) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
