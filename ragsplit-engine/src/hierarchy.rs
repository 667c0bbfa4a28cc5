//! Parent-child composition
//!
//! A coarse recursive pass at [`PARENT_SCALE`] times the chunk size yields
//! parent blocks. Each parent is split again at the chunk size and the
//! children are numbered globally, parents in order.

use crate::{
    adaptive_dispatcher::AdaptiveDispatcher,
    assembler::DraftChunk,
    chunk::Chunk,
    config::PARENT_SCALE,
    error::Result,
    executor::ExecutionMode,
};
use ragsplit_core::{RecursiveSplitter, TextSplit};
use tracing::{debug, trace};

/// A parent block of the coarse pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentBlock {
    /// `parent-<i>`
    pub id: String,
    /// Block text
    pub content: String,
}

/// Outcome of a parent-child split before offsets are resolved
#[derive(Debug, Clone)]
pub struct Hierarchy {
    /// Parent blocks of the coarse pass
    pub parents: Vec<ParentBlock>,
    /// Children in global order, tagged with their parent
    pub children: Vec<DraftChunk>,
    /// Mode the child passes ran in
    pub mode_used: ExecutionMode,
}

/// Split `text` into parent blocks
pub fn split_parents(splitter: &RecursiveSplitter, text: &str) -> Vec<ParentBlock> {
    let parent_splitter = splitter.with_params(splitter.params().scaled(PARENT_SCALE));
    parent_splitter
        .split(text)
        .into_iter()
        .enumerate()
        .map(|(i, content)| ParentBlock {
            id: Chunk::parent_id_for(i),
            content,
        })
        .collect()
}

/// Split `text` into parents, then every parent into children
pub fn build_hierarchy(
    splitter: &RecursiveSplitter,
    dispatcher: &AdaptiveDispatcher,
    text: &str,
    mode: ExecutionMode,
) -> Result<Hierarchy> {
    let parents = split_parents(splitter, text);
    debug!(parents = parents.len(), "parent pass complete");

    let blocks: Vec<&str> = parents.iter().map(|p| p.content.as_str()).collect();
    let (groups, mode_used) = dispatcher.dispatch(splitter, &blocks, mode)?;

    let mut children = Vec::new();
    for (parent, group) in parents.iter().zip(groups) {
        trace!(parent = %parent.id, children = group.len(), "child pass");
        children.extend(group.into_iter().map(|content| DraftChunk {
            content,
            parent_id: Some(parent.id.clone()),
        }));
    }

    Ok(Hierarchy {
        parents,
        children,
        mode_used,
    })
}
