//! Chunk metadata.
//!
//! Metadata is a free-form map of scalar values (strings, numbers, bools)
//! that travels with every chunk into the vector store, where it is used
//! for filtering. A few keys have meaning here:
//!
//! - `source`: names prose chunks (`"<source>_<index>"`)
//! - `source_type`, `repository`, `file_path`, `timestamp`: written by
//!   [`create_metadata`]

use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;

/// Key/value metadata attached to each chunk.
pub type Metadata = HashMap<String, Value>;

/// Placeholder used in chunk ids when metadata has no `source` key.
pub const UNKNOWN_SOURCE: &str = "unk";

/// Build the standard metadata for a piece of repository content.
///
/// `timestamp` is the wall-clock time of the call in Unix seconds.
/// Entries in `extra` are applied last and override the fixed keys.
///
/// ```rust
/// use chunkwise::create_metadata;
///
/// let metadata = create_metadata("code", "acme/repo", "a.py", [("author", "bob")]);
/// assert_eq!(metadata["source_type"], "code");
/// assert_eq!(metadata["author"], "bob");
/// assert!(metadata["timestamp"].is_number());
/// ```
pub fn create_metadata<I, K, V>(
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
    let mut metadata = Metadata::new();
    metadata.insert("source_type".into(), source_type.into());
    metadata.insert("repository".into(), repo_name.into());
    metadata.insert("file_path".into(), file_path.into());
    metadata.insert("timestamp".into(), unix_seconds().into());

    metadata.extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
    metadata
}

/// The `source` entry rendered for use in a chunk id.
pub(crate) fn source_label(metadata: &Metadata) -> String {
    match metadata.get("source") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => UNKNOWN_SOURCE.to_string(),
    }
}

fn unix_seconds() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_keys() {
        let extra = Vec::<(String, Value)>::new();
        let metadata = create_metadata("doc", "acme/repo", "README.md", extra);
        assert_eq!(metadata["source_type"], "doc");
        assert_eq!(metadata["repository"], "acme/repo");
        assert_eq!(metadata["file_path"], "README.md");
        assert!(metadata["timestamp"].as_f64().unwrap() > 1_600_000_000.0);
        assert_eq!(metadata.len(), 4);
    }

    #[test]
    fn test_extras_override_fixed_keys() {
        let metadata = create_metadata(
            "code",
            "acme/repo",
            "a.py",
            [("file_path", Value::from("b.py")), ("lines", Value::from(12))],
        );
        assert_eq!(metadata["file_path"], "b.py");
        assert_eq!(metadata["lines"], 12);
    }

    #[test]
    fn test_source_label() {
        let mut metadata = Metadata::new();
        assert_eq!(source_label(&metadata), "unk");

        metadata.insert("source".into(), "issue".into());
        assert_eq!(source_label(&metadata), "issue");

        metadata.insert("source".into(), 42.into());
        assert_eq!(source_label(&metadata), "42");
    }
}
