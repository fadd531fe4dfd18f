//! Sentence-based chunking with overlap.
//!
//! Splits prose into sentences, then packs whole sentences into chunks of
//! at most `chunk_size` characters.
//!
//! ## The Algorithm
//!
//! ```text
//! chunk_size = 40, overlap = 1 sentence
//!
//! Sentences: [S1 (15), S2 (15), S3 (15), S4 (15)]
//!
//! S1        -> running 15            fits
//! S2        -> running 30            fits
//! S3        -> 30 + 15 > 40          close "S1 S2", seed with [S2, S3]
//! S4        -> 30 + 15 > 40          close "S2 S3", seed with [S3, S4]
//! end       ->                       close "S3 S4"
//!
//! Chunk 0: "S1 S2"
//! Chunk 1: "S2 S3"   <- S2 repeated as overlap
//! Chunk 2: "S3 S4"   <- S3 repeated as overlap
//! ```
//!
//! The size bound is soft: a sentence longer than `chunk_size` becomes a
//! chunk of its own rather than being cut mid-sentence. The seeded
//! accumulator may also already exceed the budget, in which case the next
//! sentence closes it immediately.
//!
//! ## Finding Sentences
//!
//! The default boundary is `.`, `!` or `?` directly followed by whitespace.
//! It knows nothing about abbreviations or decimals:
//!
//! ```text
//! "Dr. Smith paid 3.50 dollars. Then he left."
//!     ^                        ^
//!     split                    split      ("3.50" survives: no whitespace)
//! ```
//!
//! [`SentenceBoundary::Unicode`] switches to UAX #29 segmentation, which
//! does not break before a lowercase continuation ("e.g. the"). It still
//! breaks after "Dr." when a capitalised word follows.

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{ChunkerConfig, SentenceBoundary};
use crate::metadata::source_label;
use crate::{Chunk, Chunker, Metadata};

/// Split text into trimmed, non-empty sentences.
///
/// ```rust
/// use chunkwise::{split_sentences, SentenceBoundary};
///
/// let sentences = split_sentences("One. Two!  Three?", SentenceBoundary::Punctuation);
/// assert_eq!(sentences, ["One.", "Two!", "Three?"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str, boundary: SentenceBoundary) -> Vec<&str> {
    let raw: Vec<&str> = match boundary {
        SentenceBoundary::Punctuation => split_on_terminal_punctuation(text),
        SentenceBoundary::Unicode => text.unicode_sentences().collect(),
    };

    raw.into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Cut after `.`, `!` or `?` wherever a whitespace run follows; the run is dropped.
fn split_on_terminal_punctuation(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            parts.push(&text[start..i]);

            let mut end = i + c.len_utf8();
            while let Some(&(j, w)) = chars.peek() {
                if !w.is_whitespace() {
                    break;
                }
                end = j + w.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}

/// Prose chunker that packs whole sentences up to a character budget.
///
/// ## Example
///
/// ```rust
/// use chunkwise::{Chunker, ChunkerConfig, Metadata, SentenceChunker};
///
/// let chunker = SentenceChunker::new(ChunkerConfig::new(30, 10).unwrap());
/// let mut metadata = Metadata::new();
/// metadata.insert("source".into(), "readme".into());
///
/// let text = "First sentence here. Second sentence here. Third one.";
/// let chunks = chunker.chunk(text, &metadata);
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].content, "First sentence here.");
/// assert_eq!(chunks[1].chunk_id, "readme_1");
/// // The closing sentence of chunk 0 is repeated at the start of chunk 1
/// assert!(chunks[1].content.starts_with("First sentence here."));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceChunker {
    config: ChunkerConfig,
}

impl SentenceChunker {
    /// Create a sentence chunker from a validated configuration.
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split `text` into overlapping chunks, each tagged with a copy of `metadata`.
    #[must_use]
    pub fn split_text(&self, text: &str, metadata: &Metadata) -> Vec<Chunk> {
        if text.is_empty() {
            return vec![];
        }

        let sentences = split_sentences(text, self.config.sentence_boundary);
        let source = source_label(metadata);
        let overlap = self.config.overlap_sentences();

        let mut chunks = Vec::with_capacity(sentences.len());
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0;

        for sentence in sentences {
            let sentence_len = sentence.chars().count();

            if current_len + sentence_len <= self.config.chunk_size {
                current.push(sentence);
                current_len += sentence_len;
                continue;
            }

            if !current.is_empty() {
                chunks.push(build_chunk(&current, metadata, &source, chunks.len()));
            }

            let keep_from = current.len().saturating_sub(overlap);
            current = current.split_off(keep_from);
            current.push(sentence);
            current_len = current.iter().map(|s| s.chars().count()).sum();
        }

        if !current.is_empty() {
            chunks.push(build_chunk(&current, metadata, &source, chunks.len()));
        }

        debug!(
            source = %source,
            chunks = chunks.len(),
            chunk_size = self.config.chunk_size,
            "split text into sentence chunks"
        );

        chunks
    }
}

fn build_chunk(sentences: &[&str], metadata: &Metadata, source: &str, index: usize) -> Chunk {
    Chunk::new(
        sentences.join(" "),
        metadata.clone(),
        format!("{source}_{index}"),
        index,
    )
}

impl Chunker for SentenceChunker {
    fn chunk(&self, text: &str, metadata: &Metadata) -> Vec<Chunk> {
        self.split_text(text, metadata)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.config.chunk_size.max(1)).max(1)
    }
}
