//! The Chunk type: a piece of text with the metadata it will be indexed under.

use serde::{Deserialize, Serialize};

use crate::Metadata;

/// A chunk of text ready to be handed to an embedding step.
///
/// Each chunk carries its own copy of the caller's metadata, so the record
/// can be embedded, stored, and retrieved on its own:
///
/// ```rust
/// use chunkwise::{Chunk, Metadata};
///
/// let mut metadata = Metadata::new();
/// metadata.insert("source".into(), "readme".into());
///
/// let chunk = Chunk::new("Install with cargo.", metadata, "readme_0", 0);
/// assert_eq!(chunk.chunk_id, "readme_0");
/// assert_eq!(chunk.metadata["source"], "readme");
/// ```
///
/// ## Identity
///
/// `chunk_id` is unique within one source: prose chunks are named
/// `"<source>_<index>"`, code chunks `"func_<index>"` or `"code_0"`.
/// Globally unique storage keys (content hash plus source hash) belong to
/// the vector store, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text.
    pub content: String,
    /// Metadata copied from the caller's context.
    pub metadata: Metadata,
    /// Identifier of this chunk within its source.
    pub chunk_id: String,
    /// Zero-based index of this chunk in the sequence.
    pub chunk_index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        metadata: Metadata,
        chunk_id: impl Into<String>,
        chunk_index: usize,
    ) -> Self {
        Self {
            content: content.into(),
            metadata,
            chunk_id: chunk_id.into(),
            chunk_index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// The length of this chunk in characters, the unit `chunk_size` is measured in.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ id: {}, index: {}, chars: {} }}",
            self.chunk_id,
            self.chunk_index,
            self.char_len()
        )
    }
}
