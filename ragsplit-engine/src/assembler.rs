//! Result assembly module
//!
//! Turns the chunk contents produced by a strategy into indexed [`Chunk`]s
//! with source offsets.

use crate::{
    chunk::Chunk,
    offsets::{OffsetMode, OffsetResolver},
};

/// Chunk content waiting for an index and offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftChunk {
    /// Chunk text
    pub content: String,
    /// Parent block identifier, if any
    pub parent_id: Option<String>,
}

impl From<String> for DraftChunk {
    fn from(content: String) -> Self {
        Self {
            content,
            parent_id: None,
        }
    }
}

/// Assembled chunks plus resolution diagnostics
#[derive(Debug, Clone, Default)]
pub struct Assembled {
    /// Chunks in emission order
    pub chunks: Vec<Chunk>,
    /// Chunks whose start could not be found in the source
    pub offset_misses: usize,
}

/// Assembler for indexing chunks and resolving their offsets
#[derive(Debug, Clone, Copy)]
pub struct ResultAssembler {
    mode: OffsetMode,
}

impl ResultAssembler {
    /// Create an assembler resolving offsets with `mode`
    pub fn new(mode: OffsetMode) -> Self {
        Self { mode }
    }

    /// Index drafts in order and locate each in `text`
    pub fn assemble<I>(&self, text: &str, drafts: I) -> Assembled
    where
        I: IntoIterator,
        I::Item: Into<DraftChunk>,
    {
        let mut resolver = OffsetResolver::new(text, self.mode);
        let chunks = drafts
            .into_iter()
            .map(Into::into)
            .enumerate()
            .map(|(index, draft)| {
                let (start_offset, end_offset) = resolver.locate(&draft.content);
                Chunk {
                    id: Chunk::id_for(index),
                    content: draft.content,
                    index,
                    start_offset,
                    end_offset,
                    parent_id: draft.parent_id,
                }
            })
            .collect();

        Assembled {
            chunks,
            offset_misses: resolver.misses(),
        }
    }
}
