//! Greedy merging of split pieces into size-bounded chunks

use crate::{text::char_len, types::SplitParams};
use alloc::{collections::VecDeque, string::String, vec::Vec};

/// Merge consecutive pieces into chunks of at most `params.chunk_size`
/// characters, joining them with `separator`
///
/// When the next piece would overflow the running chunk, the chunk is
/// closed and the next one is seeded with the trailing pieces that fit in
/// `params.overlap` characters (separators between them included). Closed
/// chunks are trimmed; chunks that trim to nothing are dropped.
///
/// A single piece longer than the chunk size is never cut here: it ends up
/// alone in an oversized chunk.
pub fn merge_splits(pieces: &[&str], separator: &str, params: SplitParams) -> Vec<String> {
    let separator_len = char_len(separator);
    let mut chunks = Vec::new();
    let mut window: VecDeque<(&str, usize)> = VecDeque::new();
    let mut total = 0;

    for &piece in pieces {
        let piece_len = char_len(piece);

        if total + piece_len + window.len() * separator_len > params.chunk_size
            && !window.is_empty()
        {
            if let Some(chunk) = join_window(&window, separator) {
                chunks.push(chunk);
            }

            // Pop from the front until what is left fits as overlap and the
            // incoming piece fits after it
            while let Some(&(_, front_len)) = window.front() {
                let joined = total + separator_len * (window.len() - 1);
                let overflows =
                    total + piece_len + window.len() * separator_len > params.chunk_size;
                if joined <= params.overlap && !overflows {
                    break;
                }
                window.pop_front();
                total -= front_len;
            }
        }

        window.push_back((piece, piece_len));
        total += piece_len;
    }

    if let Some(chunk) = join_window(&window, separator) {
        chunks.push(chunk);
    }

    chunks
}

fn join_window(window: &VecDeque<(&str, usize)>, separator: &str) -> Option<String> {
    let mut joined = String::new();
    for (i, (piece, _)) in window.iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        joined.push_str(piece);
    }

    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(String::from(trimmed))
    }
}
