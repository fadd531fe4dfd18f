//! Scenario tests for the public operations.
//!
//! These pin down concrete inputs and outputs: the exact chunks, ids and
//! metadata a caller gets back.

use chunkwise::extract::{extract_code_blocks, extract_issue_references, ReferenceKind};
use chunkwise::{
    clean_code, clean_text, create_metadata, split_code_by_function, split_sentences, Chunk,
    Chunker, ChunkerConfig, CodeChunker, DataProcessor, Metadata, SentenceBoundary,
    SentenceChunker,
};

fn source(name: &str) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("source".into(), name.into());
    metadata
}

fn contents(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(|c| c.content.as_str()).collect()
}

fn ids(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(|c| c.chunk_id.as_str()).collect()
}

// =============================================================================
// split_text
// =============================================================================

#[test]
fn three_short_sentences_each_close_a_chunk() {
    // Every sentence overflows a budget of 1, so each one closes a chunk;
    // the carried-over sentence rides along into the next.
    let processor = DataProcessor::new(1, 0).unwrap();
    let chunks = processor.split_text("A. B. C.", &source("s"));

    assert_eq!(ids(&chunks), ["s_0", "s_1", "s_2"]);
    assert_eq!(
        chunks.iter().map(|c| c.chunk_index).collect::<Vec<_>>(),
        [0, 1, 2]
    );
    assert_eq!(contents(&chunks), ["A.", "A. B.", "B. C."]);
}

#[test]
fn short_sentences_pack_until_budget() {
    // "A." + "B." is 4 characters and fits in 5; "C." does not
    let processor = DataProcessor::new(5, 0).unwrap();
    let chunks = processor.split_text("A. B. C.", &source("s"));

    assert_eq!(contents(&chunks), ["A. B.", "B. C."]);
    assert_eq!(ids(&chunks), ["s_0", "s_1"]);
}

#[test]
fn text_within_budget_is_returned_whole() {
    let processor = DataProcessor::default();
    let text = "Clone the repo.  Run the tests!\nShip it?";
    let chunks = processor.split_text(text, &source("readme"));

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, "Clone the repo. Run the tests! Ship it?");
}

#[test]
fn empty_and_blank_text_yield_nothing() {
    let processor = DataProcessor::default();
    assert!(processor.split_text("", &source("s")).is_empty());
    assert!(processor.split_text(" \n\t ", &source("s")).is_empty());
}

#[test]
fn oversized_sentence_is_not_cut() {
    let processor = DataProcessor::new(10, 0).unwrap();
    let long = "This sentence is far longer than ten characters.";
    let chunks = processor.split_text(long, &source("s"));

    assert_eq!(contents(&chunks), [long]);
}

#[test]
fn unicode_boundaries_keep_lowercase_continuations() {
    let text = "Use e.g. the cache. Then stop.";

    assert_eq!(
        split_sentences(text, SentenceBoundary::Punctuation),
        ["Use e.g.", "the cache.", "Then stop."]
    );
    assert_eq!(
        split_sentences(text, SentenceBoundary::Unicode),
        ["Use e.g. the cache.", "Then stop."]
    );

    let unicode = SentenceChunker::new(
        ChunkerConfig::new(20, 0)
            .unwrap()
            .with_sentence_boundary(SentenceBoundary::Unicode),
    );
    let chunks = unicode.split_text(text, &source("s"));
    assert_eq!(contents(&chunks), ["Use e.g. the cache.", "Use e.g. the cache. Then stop."]);
}

// =============================================================================
// split_code_by_function
// =============================================================================

const TWO_FUNCTIONS: &str = "\
def greet(name):
    message = f\"hello {name}\"
    return message

def add(a, b):
    return a + b
";

#[test]
fn two_functions_two_chunks() {
    let chunks = split_code_by_function(TWO_FUNCTIONS, "python");

    assert_eq!(ids(&chunks), ["func_0", "func_1"]);
    for chunk in &chunks {
        assert_eq!(chunk.content.matches("def ").count(), 1);
        assert_eq!(chunk.metadata["type"], "code");
        assert_eq!(chunk.metadata["language"], "python");
        assert_eq!(chunk.metadata["unit"], "function");
    }
    assert_eq!(
        chunks[0].content,
        "def greet(name):\n    message = f\"hello {name}\"\n    return message"
    );
    assert_eq!(chunks[1].content, "def add(a, b):\n    return a + b");
}

#[test]
fn unrecognised_language_is_one_file_chunk() {
    let code = "package main\n\nfunc main() {}\n";
    let chunks = split_code_by_function(code, "go");

    assert_eq!(ids(&chunks), ["code_0"]);
    assert_eq!(chunks[0].content, code);
    assert_eq!(chunks[0].metadata["unit"], "file");
}

#[test]
fn code_chunker_keeps_caller_metadata() {
    let metadata = create_metadata("code", "acme/repo", "lib/util.py", [("branch", "main")]);
    let chunks = CodeChunker::for_path("lib/util.py").chunk(TWO_FUNCTIONS, &metadata);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].metadata["file_path"], "lib/util.py");
    assert_eq!(chunks[1].metadata["branch"], "main");
    assert_eq!(chunks[1].metadata["unit"], "function");
}

// =============================================================================
// Cleaning and metadata
// =============================================================================

#[test]
fn clean_text_examples() {
    assert_eq!(clean_text(""), "");
    assert_eq!(clean_text("  a   b  "), "a b");
    assert_eq!(clean_text("tab\there\r\nnew\u{000C}page"), "tab here new page");
}

#[test]
fn clean_code_examples() {
    let code = "def f():    \n\n\n    x = 1  \n    return x\n\n";
    assert_eq!(clean_code(code, "python"), "def f():\n    x = 1\n    return x");
}

#[test]
fn create_metadata_example() {
    let metadata = create_metadata("code", "acme/repo", "a.py", [("author", "bob")]);

    assert_eq!(metadata["source_type"], "code");
    assert_eq!(metadata["repository"], "acme/repo");
    assert_eq!(metadata["file_path"], "a.py");
    assert_eq!(metadata["author"], "bob");
    assert!(metadata["timestamp"].is_number());
}

// =============================================================================
// Issue bodies end to end
// =============================================================================

#[test]
fn issue_body_pipeline() {
    let body = "Parser crashes on empty input. See #41 and acme/core#7.\n\n\
                ```python\ndef parse(s):\n    return s.split()\n```\n";
    let processor = DataProcessor::default();

    let blocks = extract_code_blocks(body);
    assert_eq!(blocks.len(), 1);
    let code_chunks = processor.split_code_by_function(&blocks[0].code, &blocks[0].language);
    assert_eq!(code_chunks[0].content, "def parse(s):\n    return s.split()");

    let refs = extract_issue_references(body, "acme/repo");
    let cross: Vec<_> = refs
        .iter()
        .filter(|r| r.kind == ReferenceKind::CrossRepo)
        .collect();
    assert_eq!(cross.len(), 1);
    assert_eq!(cross[0].repo, "acme/core");

    let prose = processor.clean_text(body);
    let chunks = processor.split_text(&prose, &source("issue_41"));
    assert_eq!(chunks[0].chunk_id, "issue_41_0");
    assert!(chunks[0].content.starts_with("Parser crashes on empty input."));
}
