//! Chunk type produced by every strategy

/// One chunk of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// `chunk-<index>`
    pub id: String,
    /// Chunk text after trimming
    pub content: String,
    /// 0-based position in the output
    pub index: usize,
    /// Byte offset of the chunk start in the source text
    pub start_offset: usize,
    /// Byte offset one past the chunk end, never beyond the source length
    pub end_offset: usize,
    /// `parent-<i>` in parent-child mode
    pub parent_id: Option<String>,
}

impl Chunk {
    /// Identifier for the chunk at `index`
    pub fn id_for(index: usize) -> String {
        format!("chunk-{index}")
    }

    /// Identifier for the parent block at `index`
    pub fn parent_id_for(index: usize) -> String {
        format!("parent-{index}")
    }

    /// Length of the content in characters
    pub fn char_len(&self) -> usize {
        ragsplit_core::char_len(&self.content)
    }
}
