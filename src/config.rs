//! Chunker configuration.
//!
//! ## Size and Overlap
//!
//! Two numbers drive prose chunking:
//!
//! - `chunk_size`: the soft character budget per chunk. Whole sentences are
//!   accumulated until the next one would cross it. A sentence longer than
//!   the budget is still emitted whole, never cut.
//! - `chunk_overlap`: how much trailing context to repeat at the start of
//!   the next chunk, in characters.
//!
//! Since chunks are built from whole sentences, overlap is applied in
//! sentences, not characters:
//!
//! ```text
//! overlap_sentences = max(1, chunk_overlap / 50)
//!
//! chunk_overlap = 50   -> 1 sentence
//! chunk_overlap = 120  -> 2 sentences
//! chunk_overlap = 0    -> 1 sentence (at least one is always carried)
//! ```
//!
//! The divisor is an assumed average sentence length. Real sentences vary
//! widely, so the character count actually repeated can be far from
//! `chunk_overlap`. Treat the setting as advisory.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Assumed average sentence length in characters, used to turn a character
/// overlap into a sentence count.
pub const AVERAGE_SENTENCE_CHARS: usize = 50;

/// How prose is cut into sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceBoundary {
    /// `.`, `!` or `?` followed by whitespace. Fast and predictable, but
    /// splits after abbreviations like "Dr." too.
    #[default]
    Punctuation,
    /// Unicode sentence segmentation (UAX #29), which does not break
    /// before a lowercase continuation such as "e.g. the".
    Unicode,
}

/// Configuration shared by the prose chunker and the [`DataProcessor`](crate::DataProcessor).
///
/// # Examples
///
/// ```rust
/// use chunkwise::{ChunkerConfig, SentenceBoundary};
///
/// let config = ChunkerConfig::new(300, 120).unwrap();
/// assert_eq!(config.overlap_sentences(), 2);
///
/// let config = ChunkerConfig::default().with_sentence_boundary(SentenceBoundary::Unicode);
/// assert_eq!(config.chunk_size, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Soft maximum number of characters per prose chunk.
    pub chunk_size: usize,
    /// Advisory number of characters to repeat between adjacent chunks.
    pub chunk_overlap: usize,
    /// Sentence detection strategy.
    pub sentence_boundary: SentenceBoundary,
}

impl ChunkerConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size == 0`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        let config = Self {
            chunk_size,
            chunk_overlap,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Use a different sentence detection strategy.
    #[must_use]
    pub fn with_sentence_boundary(self, sentence_boundary: SentenceBoundary) -> Self {
        Self {
            sentence_boundary,
            ..self
        }
    }

    /// Check the chunk size.
    ///
    /// Any overlap is accepted, including one above `chunk_size`; it only
    /// picks how many sentences are carried.
    /// Deserialized configs are not validated automatically; call this (or
    /// build a [`DataProcessor`](crate::DataProcessor)) before use.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }

    /// Number of trailing sentences carried into the next chunk.
    #[must_use]
    pub const fn overlap_sentences(&self) -> usize {
        let n = self.chunk_overlap / AVERAGE_SENTENCE_CHARS;
        if n > 1 {
            n
        } else {
            1
        }
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
            sentence_boundary: SentenceBoundary::Punctuation,
        }
    }
}
