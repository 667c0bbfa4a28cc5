//! Fixed and recursive splitters

use crate::{
    merge::merge_splits,
    separator::{pick_separator, split_on_separator},
    text::char_len,
    types::{SeparatorPlacement, SplitParams},
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// A pure text splitting pass
///
/// Implementations return chunk contents in document order and must be
/// deterministic: equal inputs always yield equal outputs.
pub trait TextSplit: Send + Sync {
    /// Split `text` into chunk contents
    fn split(&self, text: &str) -> Vec<String>;

    /// Parameters this splitter works with
    fn params(&self) -> SplitParams;
}

/// Splits on one separator and merges the pieces back up to the chunk size
#[derive(Debug, Clone)]
pub struct FixedSplitter {
    params: SplitParams,
    separator: String,
}

impl FixedSplitter {
    /// Create a fixed splitter; an empty separator splits anywhere
    pub fn new(params: SplitParams, separator: impl Into<String>) -> Self {
        Self {
            params,
            separator: separator.into(),
        }
    }

    /// The separator pieces are split on and joined with
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl TextSplit for FixedSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let pieces = split_on_separator(text, &self.separator, SeparatorPlacement::Discard);
        merge_splits(&pieces, &self.separator, self.params)
    }

    fn params(&self) -> SplitParams {
        self.params
    }
}

/// Tries separators from coarsest to finest, recursing into oversized pieces
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    params: SplitParams,
    separators: Vec<String>,
}

impl RecursiveSplitter {
    /// Create a recursive splitter
    ///
    /// An empty separator list behaves like `[""]` (character level).
    pub fn new<I, S>(params: SplitParams, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params,
            separators: separators.into_iter().map(Into::into).collect(),
        }
    }

    /// The ordered separator list
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Same separators, different parameters
    pub fn with_params(&self, params: SplitParams) -> Self {
        Self {
            params,
            separators: self.separators.clone(),
        }
    }

    fn split_with(&self, text: &str, separators: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();
        let (separator, remaining) = pick_separator(text, separators);
        let pieces = split_on_separator(text, separator, SeparatorPlacement::Leading);

        let mut fitting: Vec<&str> = Vec::new();
        for piece in pieces {
            if char_len(piece) < self.params.chunk_size {
                fitting.push(piece);
                continue;
            }

            if !fitting.is_empty() {
                chunks.extend(merge_splits(&fitting, "", self.params));
                fitting.clear();
            }

            match remaining {
                Some(rest) => chunks.extend(self.split_with(piece, rest)),
                None => {
                    let trimmed = piece.trim();
                    if !trimmed.is_empty() {
                        chunks.push(trimmed.to_string());
                    }
                }
            }
        }

        if !fitting.is_empty() {
            chunks.extend(merge_splits(&fitting, "", self.params));
        }

        chunks
    }
}

impl TextSplit for RecursiveSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.split_with(text, &self.separators)
    }

    fn params(&self) -> SplitParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

    #[test]
    fn test_fixed_char_level_reconstructs() {
        let splitter = FixedSplitter::new(SplitParams::new(4, 0).unwrap(), "");
        let chunks = splitter.split("A. B. C.");
        assert_eq!(chunks, vec!["A. B", ". C."]);
        assert_eq!(chunks.concat(), "A. B. C.");
    }

    #[test]
    fn test_fixed_merges_paragraphs() {
        let splitter = FixedSplitter::new(SplitParams::new(30, 0).unwrap(), "\n\n");
        let chunks = splitter.split("one\n\ntwo\n\nthree is longer than the rest");
        assert_eq!(chunks, vec!["one\n\ntwo", "three is longer than the rest"]);
    }

    #[test]
    fn test_fixed_empty_text() {
        let splitter = FixedSplitter::new(SplitParams::new(4, 1).unwrap(), "\n\n");
        assert!(splitter.split("").is_empty());
    }

    #[test]
    fn test_recursive_keeps_paragraphs_whole() {
        let splitter = RecursiveSplitter::new(SplitParams::new(40, 10).unwrap(), DEFAULT_SEPARATORS);
        let text = "The first paragraph is here.\n\nThe second paragraph follows.";
        let chunks = splitter.split(text);
        assert_eq!(
            chunks,
            vec!["The first paragraph is here.", "The second paragraph follows."]
        );
    }

    #[test]
    fn test_recursive_falls_back_to_words() {
        let splitter = RecursiveSplitter::new(SplitParams::new(10, 0).unwrap(), DEFAULT_SEPARATORS);
        let chunks = splitter.split("alpha beta gamma delta");
        assert_eq!(chunks, vec!["alpha beta", "gamma", "delta"]);
        for chunk in &chunks {
            assert!(char_len(chunk) <= 10);
        }
    }

    #[test]
    fn test_recursive_whole_document_fits() {
        let splitter = RecursiveSplitter::new(SplitParams::new(1000, 100).unwrap(), DEFAULT_SEPARATORS);
        let chunks = splitter.split("Short text.");
        assert_eq!(chunks, vec!["Short text."]);
    }

    #[test]
    fn test_recursive_oversized_token_without_separators() {
        let splitter = RecursiveSplitter::new(SplitParams::new(5, 0).unwrap(), ["\n\n"]);
        let chunks = splitter.split("abcdefghij");
        assert_eq!(chunks, vec!["abcdefghij"]);
    }

    #[test]
    fn test_recursive_exhausted_separators_go_char_level() {
        let splitter = RecursiveSplitter::new(SplitParams::new(5, 0).unwrap(), [" "]);
        let chunks = splitter.split("ab abcdefghij cd");
        assert_eq!(chunks, vec!["ab", "abcd", "efghi", "j", "cd"]);
    }

    #[test]
    fn test_recursive_empty_separator_list_is_char_level() {
        let splitter = RecursiveSplitter::new(SplitParams::new(3, 0).unwrap(), Vec::<String>::new());
        let chunks = splitter.split("abcdefg");
        assert_eq!(chunks, vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_recursive_empty_text() {
        let splitter = RecursiveSplitter::new(SplitParams::new(3, 0).unwrap(), DEFAULT_SEPARATORS);
        assert!(splitter.split("").is_empty());
    }
}
