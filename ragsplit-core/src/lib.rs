//! Separator-driven text splitting primitives
//!
//! This crate holds the deterministic heart of ragsplit: splitting text at
//! literal separators, greedily merging the pieces back into size-bounded
//! chunks with trailing overlap, and recursing through an ordered separator
//! list from coarse (paragraphs) to fine (characters).
//!
//! It performs no I/O, keeps no state between calls and depends only on
//! `core` and `alloc`.
//!
//! # Example
//!
//! ```rust
//! use ragsplit_core::{RecursiveSplitter, SplitParams, TextSplit};
//!
//! let params = SplitParams::new(20, 0).unwrap();
//! let splitter = RecursiveSplitter::new(params, ["\n\n", "\n", " ", ""]);
//!
//! let chunks = splitter.split("First paragraph.\n\nSecond paragraph.");
//! assert_eq!(chunks, vec!["First paragraph.", "Second paragraph."]);
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod merge;
pub mod separator;
pub mod splitter;
pub mod text;
pub mod types;

pub use error::{CoreError, Result};
pub use merge::merge_splits;
pub use separator::{pick_separator, split_on_separator};
pub use splitter::{FixedSplitter, RecursiveSplitter, TextSplit};
pub use text::{char_len, char_prefix, find_from, floor_char_boundary, next_char_boundary};
pub use types::{SeparatorPlacement, SplitParams};
