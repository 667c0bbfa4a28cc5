//! UTF-8 safe text helpers
//!
//! Lengths are counted in characters while positions stay byte offsets, so
//! every position returned here can be used to slice the original `&str`.

/// Number of characters in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `n` characters of `text` (the whole text if shorter)
pub fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Byte position of the character boundary after the one at `pos`
///
/// Returns `text.len()` when `pos` is at or past the last character.
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut next = pos + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

/// Largest character boundary at or before `pos`, clamped to `text.len()`
pub fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Find `needle` in `haystack` starting at byte position `from`
///
/// `from` is moved forward to the next character boundary if it falls inside
/// a multi-byte character. The returned position is absolute.
pub fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    let mut start = from;
    while start < haystack.len() && !haystack.is_char_boundary(start) {
        start += 1;
    }
    haystack[start..].find(needle).map(|found| start + found)
}
