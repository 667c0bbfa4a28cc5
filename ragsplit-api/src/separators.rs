//! Separator parsing for user-supplied input
//!
//! Separators typed into a form or passed on the command line arrive with
//! escape sequences spelled out (`\n` as a backslash and an `n`).

/// Replace the literal escape sequences `\n` and `\t` with the characters
/// they stand for
///
/// ```
/// use ragsplit_api::separators::unescape_separator;
///
/// assert_eq!(unescape_separator("\\n\\n"), "\n\n");
/// assert_eq!(unescape_separator(". "), ". ");
/// ```
pub fn unescape_separator(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\t", "\t")
}

/// Parse a comma-separated separator list
///
/// Each entry is trimmed and then unescaped, so a lone space between two
/// commas becomes the empty (character level) separator.
pub fn parse_separator_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|entry| unescape_separator(entry.trim()))
        .collect()
}

/// Unescape every separator of a list
pub fn unescape_all<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|s| unescape_separator(s.as_ref())).collect()
}
