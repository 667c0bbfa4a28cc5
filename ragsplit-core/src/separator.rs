//! Splitting text at literal separators

use crate::{text::next_char_boundary, types::SeparatorPlacement};
use alloc::{string::String, vec::Vec};

/// Split `text` at every occurrence of `separator`
///
/// An empty separator splits into individual characters. Empty pieces are
/// never returned. With [`SeparatorPlacement::Leading`] each occurrence
/// opens the piece after it, and overlapping occurrences each start a new
/// piece (`"a\n\n\nb"` on `"\n\n"` gives `["a", "\n", "\n\nb"]`).
pub fn split_on_separator<'a>(
    text: &'a str,
    separator: &str,
    placement: SeparatorPlacement,
) -> Vec<&'a str> {
    if separator.is_empty() {
        return split_chars(text);
    }

    match placement {
        SeparatorPlacement::Discard => text
            .split(separator)
            .filter(|piece| !piece.is_empty())
            .collect(),
        SeparatorPlacement::Leading => split_before(text, separator),
    }
}

/// Choose the separator to split `text` with
///
/// Returns the first separator that occurs in `text` together with the
/// separators after it. The empty separator is chosen as soon as it is
/// reached and leaves nothing to recurse with. When no separator occurs the
/// last one is returned, also with nothing left.
pub fn pick_separator<'s>(text: &str, separators: &'s [String]) -> (&'s str, Option<&'s [String]>) {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_empty() {
            return ("", None);
        }
        if text.contains(separator.as_str()) {
            return (separator.as_str(), Some(&separators[i + 1..]));
        }
    }

    (separators.last().map(String::as_str).unwrap_or(""), None)
}

fn split_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(start, ch)| &text[start..start + ch.len_utf8()])
        .collect()
}

fn split_before<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    let mut from = 0;

    while let Some(found) = text[from..].find(separator) {
        let at = from + found;
        if at > piece_start {
            pieces.push(&text[piece_start..at]);
            piece_start = at;
        }
        from = next_char_boundary(text, at);
    }

    if piece_start < text.len() {
        pieces.push(&text[piece_start..]);
    }

    pieces
}
