//! Property-based tests for the splitting strategies

use proptest::prelude::*;
use std::collections::BTreeSet;
use ragsplit_engine::{Chunk, SplitProcessor, SplitProcessorBuilder, Strategy as SplitStrategy};

const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zé日 \n]{0,400}"
}

fn strategy_strategy() -> impl Strategy<Value = SplitStrategy> {
    prop_oneof![
        Just(SplitStrategy::Fixed),
        Just(SplitStrategy::Recursive),
        Just(SplitStrategy::ParentChild),
    ]
}

fn build(strategy: SplitStrategy, chunk_size: usize, overlap: usize, separators: &[&str]) -> SplitProcessor {
    SplitProcessorBuilder::new()
        .strategy(strategy)
        .chunk_size(chunk_size)
        .overlap_size(overlap)
        .separators(separators.iter().copied())
        .build()
        .unwrap()
}

fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether the chunks, read in order, cover `source` without a gap
///
/// Each chunk must occur in `source` no later than the end of what earlier
/// chunks already covered; overlapping chunks may start before it.
fn covers_in_order(source: &[char], chunks: &[Vec<char>]) -> bool {
    let mut covered = 0;
    for chunk in chunks {
        let end = (0..=covered.min(source.len()))
            .filter(|&start| source[start..].starts_with(chunk))
            .map(|start| start + chunk.len())
            .max();
        match end {
            Some(end) => covered = covered.max(end),
            None => return false,
        }
    }
    covered == source.len()
}

fn contents(chunks: &[Chunk]) -> Vec<String> {
    chunks.iter().map(|c| c.content.clone()).collect()
}

proptest! {
    /// Without overlap every non-whitespace character survives, in order
    #[test]
    fn prop_coverage_without_overlap(
        text in text_strategy(),
        strategy in strategy_strategy(),
        chunk_size in 1usize..80,
    ) {
        let separators: &[&str] = match strategy {
            SplitStrategy::Fixed => &[" "],
            _ => &DEFAULT_SEPARATORS,
        };
        let chunks = build(strategy, chunk_size, 0, separators).split(&text).unwrap();
        let rebuilt: String = chunks.iter().map(|c| non_whitespace(&c.content)).collect();
        prop_assert_eq!(rebuilt, non_whitespace(&text));
    }

    /// With overlap, chunks repeat context but still lose no character
    #[test]
    fn prop_coverage_with_overlap(
        text in text_strategy(),
        strategy in strategy_strategy(),
        chunk_size in 2usize..80,
        overlap_ratio in 1usize..50,
    ) {
        let overlap = (chunk_size * overlap_ratio / 100).max(1);
        let separators: &[&str] = match strategy {
            SplitStrategy::Fixed => &[" "],
            _ => &DEFAULT_SEPARATORS,
        };
        let chunks = build(strategy, chunk_size, overlap, separators).split(&text).unwrap();

        let source: Vec<char> = non_whitespace(&text).chars().collect();
        let pieces: Vec<Vec<char>> = chunks
            .iter()
            .map(|c| non_whitespace(&c.content).chars().collect())
            .collect();
        prop_assert!(covers_in_order(&source, &pieces));
    }

    /// Indices are dense, ids follow them and offsets stay inside the text
    #[test]
    fn prop_indices_and_offsets(
        text in text_strategy(),
        strategy in strategy_strategy(),
        chunk_size in 2usize..80,
        overlap_ratio in 0usize..50,
    ) {
        let overlap = chunk_size * overlap_ratio / 100;
        let chunks = build(strategy, chunk_size, overlap, &DEFAULT_SEPARATORS).split(&text).unwrap();
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.index, i);
            prop_assert_eq!(&chunk.id, &format!("chunk-{i}"));
            prop_assert!(chunk.start_offset <= chunk.end_offset);
            prop_assert!(chunk.end_offset <= text.len());
            prop_assert!(text.is_char_boundary(chunk.start_offset));
            prop_assert!(text.is_char_boundary(chunk.end_offset));
            prop_assert!(!chunk.content.trim().is_empty());
        }
    }

    /// With a character-level fallback no chunk exceeds the chunk size
    #[test]
    fn prop_size_bound(
        text in text_strategy(),
        strategy in prop_oneof![Just(SplitStrategy::Recursive), Just(SplitStrategy::ParentChild)],
        chunk_size in 1usize..80,
        overlap_ratio in 0usize..50,
    ) {
        let overlap = chunk_size * overlap_ratio / 100;
        let chunks = build(strategy, chunk_size, overlap, &DEFAULT_SEPARATORS).split(&text).unwrap();
        for chunk in &chunks {
            prop_assert!(chunk.char_len() <= chunk_size, "{} > {}", chunk.char_len(), chunk_size);
        }
    }

    /// Repeated context never exceeds the overlap budget
    #[test]
    fn prop_overlap_bound(
        text in text_strategy(),
        chunk_size in 2usize..80,
        overlap_ratio in 0usize..50,
    ) {
        let overlap = chunk_size * overlap_ratio / 100;
        let chunks = build(SplitStrategy::Recursive, chunk_size, overlap, &DEFAULT_SEPARATORS)
            .split(&text)
            .unwrap();
        let total: usize = chunks.iter().map(Chunk::char_len).sum();
        let budget = text.chars().count() + chunks.len().saturating_sub(1) * overlap;
        prop_assert!(total <= budget, "{} > {}", total, budget);
    }

    /// Equal inputs give equal outputs
    #[test]
    fn prop_deterministic(
        text in text_strategy(),
        strategy in strategy_strategy(),
        chunk_size in 2usize..80,
    ) {
        let processor = build(strategy, chunk_size, chunk_size / 4, &DEFAULT_SEPARATORS);
        let first = processor.split(&text).unwrap();
        let second = processor.split(&text).unwrap();
        prop_assert_eq!(contents(&first), contents(&second));
        prop_assert_eq!(first, second);
    }

    /// Children reference real parents, grouped in parent order, and every
    /// parent block has at least one child
    #[test]
    fn prop_parent_child_nesting(
        text in text_strategy(),
        chunk_size in 2usize..80,
    ) {
        let output = build(SplitStrategy::ParentChild, chunk_size, chunk_size / 5, &DEFAULT_SEPARATORS)
            .process(&text)
            .unwrap();
        let parents = output.metadata.parent_count.unwrap_or(0);

        let mut previous = 0;
        let mut distinct = BTreeSet::new();
        for chunk in &output.chunks {
            let parent: usize = chunk
                .parent_id
                .as_deref()
                .and_then(|id| id.strip_prefix("parent-"))
                .and_then(|n| n.parse().ok())
                .unwrap();
            prop_assert!(parent < parents);
            prop_assert!(parent >= previous);
            previous = parent;
            distinct.insert(parent);
        }
        prop_assert_eq!(distinct.len(), parents);
    }

    /// Located fixed chunks no longer than the probe map back to their content
    #[test]
    fn prop_fixed_offsets_are_exact(
        text in "[a-z ]{0,300}",
        chunk_size in 1usize..50,
    ) {
        let chunks = build(SplitStrategy::Fixed, chunk_size, 0, &[""]).split(&text).unwrap();
        for chunk in &chunks {
            prop_assert_eq!(&text[chunk.start_offset..chunk.end_offset], chunk.content.as_str());
        }
    }
}
