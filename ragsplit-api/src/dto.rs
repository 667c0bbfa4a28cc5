//! Data Transfer Objects for API

use crate::{
    error::{ApiError, Result},
    stats::SplitStats,
};
use ragsplit_engine::{Chunk, ProcessingMetadata};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Chunk information for serialization
///
/// Serialized field names are camelCase (`startOffset`, `parentId`) and
/// `parentId` is omitted outside parent-child mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChunkDTO {
    /// `chunk-<index>`
    pub id: String,
    /// Chunk text
    pub content: String,
    /// 0-based position in the output
    pub index: usize,
    /// Byte offset of the chunk start in the source
    pub start_offset: usize,
    /// Byte offset one past the chunk end
    pub end_offset: usize,
    /// Parent block in parent-child mode
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub parent_id: Option<String>,
}

impl ChunkDTO {
    /// Length of the content in characters
    pub fn char_len(&self) -> usize {
        ragsplit_core::char_len(&self.content)
    }
}

impl From<Chunk> for ChunkDTO {
    fn from(chunk: Chunk) -> Self {
        Self {
            id: chunk.id,
            content: chunk.content,
            index: chunk.index,
            start_offset: chunk.start_offset,
            end_offset: chunk.end_offset,
            parent_id: chunk.parent_id,
        }
    }
}

/// Processing metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Strategy identifier
    pub strategy: String,
    /// Execution mode used
    pub mode_used: String,
    /// Chunk size in characters
    pub chunk_size: usize,
    /// Overlap in characters
    pub overlap_size: usize,
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Parent blocks (parent-child only)
    pub parent_count: Option<usize>,
    /// Chunks whose start could not be found in the source
    pub offset_misses: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl Metadata {
    pub(crate) fn from_engine(metadata: ProcessingMetadata, chunk_size: usize, overlap_size: usize) -> Self {
        Self {
            strategy: metadata.strategy.as_str().to_string(),
            mode_used: metadata.execution_mode.as_str().to_string(),
            chunk_size,
            overlap_size,
            total_bytes: metadata.bytes_processed,
            total_chars: metadata.chars_processed,
            parent_count: metadata.parent_count,
            offset_misses: metadata.offset_misses,
            processing_time_ms: metadata.processing_time_ms,
        }
    }
}

/// Complete output with chunks, statistics and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Chunks in index order
    pub chunks: Vec<ChunkDTO>,
    /// Summary statistics
    pub stats: SplitStats,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunks were produced
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
