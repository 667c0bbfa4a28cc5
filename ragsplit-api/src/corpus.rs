//! Splitting several documents and naming the resulting index

use crate::{config::Config, dto::ChunkDTO, error::Result, TextSplitter};
use tracing::debug;

/// A document to split
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Caller-chosen identifier, used as the chunk id prefix
    pub id: String,
    /// Document text
    pub content: String,
}

impl Document {
    /// Create a document
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// An ordered collection of documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corpus {
    /// Documents in order
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

/// A chunk tagged with its document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorpusChunk {
    /// `<document id>-<chunk index>`
    pub id: String,
    /// Document the chunk came from
    pub document_id: String,
    /// The chunk itself, offsets relative to its document
    pub chunk: ChunkDTO,
}

/// Split every document of `corpus` with the same configuration
///
/// Chunks are returned document by document, each document's chunks in
/// index order.
pub fn split_corpus(corpus: &Corpus, config: &Config) -> Result<Vec<CorpusChunk>> {
    let splitter = TextSplitter::with_config(config.clone())?;
    let mut all = Vec::new();

    for document in &corpus.documents {
        let output = splitter.process_text(&document.content)?;
        debug!(document = %document.id, chunks = output.chunks.len(), "document split");
        all.extend(output.chunks.into_iter().map(|chunk| CorpusChunk {
            id: format!("{}-{}", document.id, chunk.index),
            document_id: document.id.clone(),
            chunk,
        }));
    }

    Ok(all)
}

/// Naming scheme for per-session search indexes
///
/// The session identifier is supplied by the caller; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexNamespace {
    prefix: String,
    session_id: String,
}

impl IndexNamespace {
    /// Create a namespace from a prefix and a session identifier
    pub fn new(prefix: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            session_id: session_id.into(),
        }
    }

    /// The session identifier
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Index name for a creation time in milliseconds since the epoch
    pub fn index_name(&self, timestamp_ms: u128) -> String {
        format!("{}-{}-{}", self.prefix, self.session_id, timestamp_ms)
    }
}
