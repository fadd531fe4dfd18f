//! Function-level chunking for source code.
//!
//! Source files embed best one function at a time: a function is a complete
//! unit of behaviour, and queries like "where is the retry logic?" usually
//! target one.
//!
//! ## How Functions Are Found
//!
//! No parser is involved. A line that looks like a Python function heading
//! opens a chunk, and the chunk keeps every following line indented deeper
//! than the heading:
//!
//! ```text
//! def load(path):          <- heading, indent 0, opens func_0
//!     data = read(path)    <- indent 4 > 0, kept
//!     return data          <- kept
//!                          <- blank line closes func_0
//! CACHE = {}               <- outside any function, dropped
//! def save(path, data):    <- opens func_1
//!     write(path, data)    <- kept
//!                          <- end of input closes func_1
//! ```
//!
//! Consequences worth knowing:
//!
//! - A blank line inside a body ends the function there.
//! - Module-level code and decorators are not emitted.
//! - A nested `def` starts its own chunk; outer-body lines after it at a
//!   shallower indent close the nested chunk and are dropped.
//! - Signatures spanning several lines are not recognised as headings.
//!
//! Languages without a heading pattern fall back to one whole-file chunk.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{Chunk, Chunker, Metadata};

// `def name(params):`, optionally `async`, optionally with a return annotation.
static PYTHON_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:async\s+)?def\s+\w+\s*\([^)]*\)\s*(?:->[^:]*)?:")
        .expect("invalid python heading pattern")
});

/// Languages with function-level chunking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    /// Python
    Python,
}

impl CodeLanguage {
    /// Parse a language tag such as `"python"` (case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "python" | "py" => Some(Self::Python),
            _ => None,
        }
    }

    /// Guess language from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::from_tag(language_for_extension(ext))
    }

    /// Canonical tag for this language.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
        }
    }

    /// Whether `line` opens a function.
    pub fn is_function_heading(&self, line: &str) -> bool {
        match self {
            Self::Python => PYTHON_HEADING.is_match(line.trim_start()),
        }
    }
}

/// Language tag for a file extension (without the dot, case-insensitive).
///
/// Covers the file types a repository crawl indexes. Only Python has
/// function splitting; the other tags label whole-file chunks. Anything
/// unmapped is `"unknown"`.
pub fn language_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "py" => "python",
        "js" => "javascript",
        "java" => "java",
        "cpp" => "cpp",
        "c" => "c",
        "md" => "markdown",
        "html" => "html",
        "css" => "css",
        "json" => "json",
        _ => "unknown",
    }
}

/// Language tag for a file path, from its extension.
///
/// ```rust
/// use chunkwise::language_for_path;
///
/// assert_eq!(language_for_path("web/app.js"), "javascript");
/// assert_eq!(language_for_path("docs/README.MD"), "markdown");
/// assert_eq!(language_for_path("Makefile"), "unknown");
/// ```
pub fn language_for_path(path: impl AsRef<Path>) -> &'static str {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map_or("unknown", language_for_extension)
}

/// The unit a code chunk represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeUnit {
    /// One function heading and its body.
    Function,
    /// A whole file, for languages without function detection.
    File,
}

impl CodeUnit {
    fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::File => "file",
        }
    }
}

/// Metadata every code chunk carries: `type`, `language` and `unit`.
fn code_metadata(language: &str, unit: CodeUnit) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("type".into(), "code".into());
    metadata.insert("language".into(), language.into());
    metadata.insert("unit".into(), unit.as_str().into());
    metadata
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Split source code into one chunk per function.
///
/// `language` is a free-form tag; it is stored on every chunk as given.
/// Unrecognised languages always produce a single `"code_0"` chunk holding
/// the whole input, even when it is empty. Python code without a function
/// heading, including empty code, produces nothing.
///
/// ```rust
/// use chunkwise::split_code_by_function;
///
/// let code = "def a():\n    return 1\ndef b():\n    return 2\n";
/// let chunks = split_code_by_function(code, "python");
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[1].chunk_id, "func_1");
/// assert_eq!(chunks[1].content, "def b():\n    return 2");
/// assert_eq!(chunks[1].metadata["unit"], "function");
/// ```
#[must_use]
pub fn split_code_by_function(code: &str, language: &str) -> Vec<Chunk> {
    let chunks = match CodeLanguage::from_tag(language) {
        Some(lang) => split_functions(code, lang, language),
        None => vec![Chunk::new(
            code,
            code_metadata(language, CodeUnit::File),
            "code_0",
            0,
        )],
    };

    debug!(language, chunks = chunks.len(), "split code into chunks");
    chunks
}

fn split_functions(code: &str, lang: CodeLanguage, tag: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut heading_indent = 0;

    for line in code.lines() {
        if lang.is_function_heading(line) {
            flush_function(&mut current, &mut chunks, tag);
            current.push(line);
            heading_indent = indent_width(line);
        } else if !current.is_empty() {
            if !line.trim().is_empty() && indent_width(line) > heading_indent {
                current.push(line);
            } else {
                flush_function(&mut current, &mut chunks, tag);
            }
        }
    }
    flush_function(&mut current, &mut chunks, tag);

    chunks
}

fn flush_function(lines: &mut Vec<&str>, chunks: &mut Vec<Chunk>, tag: &str) {
    if lines.is_empty() {
        return;
    }
    let index = chunks.len();
    chunks.push(Chunk::new(
        lines.join("\n"),
        code_metadata(tag, CodeUnit::Function),
        format!("func_{index}"),
        index,
    ));
    lines.clear();
}

/// A [`Chunker`] over source code in one language.
///
/// Through the trait, the caller's metadata is merged into every chunk;
/// the code tags (`type`, `language`, `unit`) win on collision.
///
/// ```rust
/// use chunkwise::{Chunker, CodeChunker, Metadata};
///
/// let chunker = CodeChunker::for_path("src/app.py");
/// let mut metadata = Metadata::new();
/// metadata.insert("file_path".into(), "src/app.py".into());
///
/// let chunks = chunker.chunk("def main():\n    run()\n", &metadata);
/// assert_eq!(chunks[0].metadata["file_path"], "src/app.py");
/// assert_eq!(chunks[0].metadata["language"], "python");
/// ```
#[derive(Debug, Clone)]
pub struct CodeChunker {
    language: String,
}

impl CodeChunker {
    /// Create a code chunker for a language tag.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// Create a code chunker labelled by [`language_for_path`].
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        Self::new(language_for_path(path))
    }

    /// The language tag chunks are labelled with.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Chunker for CodeChunker {
    fn chunk(&self, text: &str, metadata: &Metadata) -> Vec<Chunk> {
        let mut chunks = split_code_by_function(text, &self.language);
        for chunk in &mut chunks {
            let tags = std::mem::replace(&mut chunk.metadata, metadata.clone());
            chunk.metadata.extend(tags);
        }
        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Rough estimate: ~400 bytes per function
        (text_len / 400).max(1)
    }
}
