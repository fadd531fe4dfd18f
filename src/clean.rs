//! Normalisation applied before chunking.

/// Normalise prose for embedding.
///
/// Drops control characters that are not whitespace, collapses every
/// whitespace run (newlines included) to a single space, and trims.
///
/// ```rust
/// use chunkwise::clean_text;
///
/// assert_eq!(clean_text("  a   b  "), "a b");
/// assert_eq!(clean_text("line one\r\n\tline\u{0007} two"), "line one line two");
/// assert_eq!(clean_text(""), "");
/// ```
#[must_use]
pub fn clean_text(text: &str) -> String {
    let visible: String = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();

    visible.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalise source code for embedding.
///
/// Strips trailing whitespace from every line and removes blank lines.
/// Indentation and line order are untouched. `language` is accepted for
/// symmetry with [`split_code_by_function`](crate::split_code_by_function)
/// and does not change the result.
///
/// ```rust
/// use chunkwise::clean_code;
///
/// let code = "def f():  \n\n    return 1\t\n\n";
/// assert_eq!(clean_code(code, "python"), "def f():\n    return 1");
/// ```
#[must_use]
pub fn clean_code(code: &str, _language: &str) -> String {
    code.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
