//! Structure extraction from issue and pull request bodies.
//!
//! Issue text mixes prose with fenced code, links, and references to other
//! issues. Pulling those out lets callers chunk code blocks with
//! [`split_code_by_function`](crate::split_code_by_function) and store links
//! and references as metadata instead of embedding them as noise.
//!
//! ```rust
//! use chunkwise::extract::{extract_code_blocks, extract_issue_references};
//!
//! let body = "Crash in parser, see #12.\n```python\nparse('x')\n```";
//!
//! let blocks = extract_code_blocks(body);
//! assert_eq!(blocks[0].language, "python");
//! assert_eq!(blocks[0].code, "parse('x')");
//!
//! let refs = extract_issue_references(body, "acme/repo");
//! assert_eq!(refs[0].number, 12);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").expect("invalid fenced block pattern"));

static MARKDOWN_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("invalid markdown link pattern")
});

static BARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^\s<>"]+|www\.[^\s<>"]+"#).expect("invalid url pattern")
});

static LOCAL_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\d+)").expect("invalid issue reference pattern"));

static CROSS_REPO_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\w-]+/[\w-]+)#(\d+)").expect("invalid cross-repo reference pattern")
});

/// A fenced code block found in Markdown text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Info-string language, or `"text"` when the fence has none.
    pub language: String,
    /// Block contents, trimmed.
    pub code: String,
    /// Line count of the trimmed contents.
    pub lines: usize,
}

/// Where a link came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// `[text](url)`
    Markdown,
    /// A bare `http(s)://` or `www.` URL.
    Direct,
}

/// A link found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Markdown or bare.
    pub kind: LinkKind,
    /// Link text; the URL itself for direct links.
    pub text: String,
    /// Link target as written.
    pub url: String,
}

/// Scope of an issue reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// `#123`, resolved against the current repository.
    Local,
    /// `owner/repo#123`
    CrossRepo,
}

/// A reference to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReference {
    /// Local or cross-repository.
    pub kind: ReferenceKind,
    /// The reference as written, e.g. `#12` or `acme/repo#12`.
    pub reference: String,
    /// Repository the number belongs to.
    pub repo: String,
    /// Issue or pull request number.
    pub number: u64,
}

/// Extract fenced code blocks.
///
/// Only fences whose info string is a single word (or empty) followed by a
/// newline are recognised.
#[must_use]
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    if text.is_empty() {
        return vec![];
    }

    let blocks: Vec<CodeBlock> = FENCED_BLOCK
        .captures_iter(text)
        .map(|caps| {
            let language = match &caps[1] {
                "" => "text".to_string(),
                lang => lang.to_string(),
            };
            let code = caps[2].trim().to_string();
            let lines = code.split('\n').count();
            CodeBlock {
                language,
                code,
                lines,
            }
        })
        .collect();

    debug!(count = blocks.len(), "extracted code blocks");
    blocks
}

/// Extract Markdown links followed by bare URLs.
///
/// A URL inside a Markdown link is reported twice: once as
/// [`LinkKind::Markdown`] and once as [`LinkKind::Direct`].
#[must_use]
pub fn extract_links(text: &str) -> Vec<Link> {
    if text.is_empty() {
        return vec![];
    }

    let markdown = MARKDOWN_LINK.captures_iter(text).map(|caps| Link {
        kind: LinkKind::Markdown,
        text: caps[1].to_string(),
        url: caps[2].to_string(),
    });
    let direct = BARE_URL.find_iter(text).map(|m| Link {
        kind: LinkKind::Direct,
        text: m.as_str().to_string(),
        url: m.as_str().to_string(),
    });
    let links: Vec<Link> = markdown.chain(direct).collect();

    debug!(count = links.len(), "extracted links");
    links
}

/// Extract `#N` references followed by `owner/repo#N` references.
///
/// Every cross-repository reference also contains a `#N`, so it shows up
/// once in each group. Numbers too large for `u64` are skipped.
#[must_use]
pub fn extract_issue_references(text: &str, repo_name: &str) -> Vec<IssueReference> {
    if text.is_empty() {
        return vec![];
    }

    let local = LOCAL_REFERENCE.captures_iter(text).filter_map(|caps| {
        let number = caps[1].parse().ok()?;
        Some(IssueReference {
            kind: ReferenceKind::Local,
            reference: format!("#{}", &caps[1]),
            repo: repo_name.to_string(),
            number,
        })
    });
    let cross = CROSS_REPO_REFERENCE.captures_iter(text).filter_map(|caps| {
        let number = caps[2].parse().ok()?;
        let repo = caps[1].to_string();
        Some(IssueReference {
            kind: ReferenceKind::CrossRepo,
            reference: caps[0].to_string(),
            repo,
            number,
        })
    });
    let references: Vec<IssueReference> = local.chain(cross).collect();

    debug!(count = references.len(), repo = repo_name, "extracted issue references");
    references
}
