//! Basic tests for ragsplit-engine

use ragsplit_engine::*;

#[test]
fn test_engine_config_presets() {
    let config = EngineConfig::default();
    assert_eq!(config.strategy, Strategy::Recursive);
    assert_eq!(config.execution_mode, ExecutionMode::Adaptive);

    let fixed = EngineConfig::fixed();
    assert_eq!(fixed.separators, vec!["\n\n"]);

    let parent_child = EngineConfig::parent_child();
    assert_eq!(parent_child.strategy, Strategy::ParentChild);
    assert_eq!(parent_child.chunk_size, 500);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = SplitProcessorBuilder::new().chunk_size(0).build();
    assert!(matches!(result, Err(EngineError::Core(CoreError::ZeroChunkSize))));

    let result = SplitProcessorBuilder::new()
        .chunk_size(100)
        .overlap_size(100)
        .build();
    assert!(matches!(
        result,
        Err(EngineError::Core(CoreError::OverlapTooLarge { .. }))
    ));
}

#[test]
fn test_sequential_executor() {
    use ragsplit_core::RecursiveSplitter;
    use ragsplit_engine::executor::SequentialExecutor;

    let splitter = RecursiveSplitter::new(SplitParams::new(10, 0).unwrap(), [" ", ""]);
    let groups = SequentialExecutor
        .split_blocks(&splitter, &["one two three", "four"])
        .unwrap();
    assert_eq!(groups, vec![vec!["one two", "three"], vec!["four"]]);
}

#[test]
fn test_recursive_processor_offsets() {
    let processor = SplitProcessorBuilder::new()
        .chunk_size(20)
        .overlap_size(0)
        .build()
        .unwrap();
    let text = "First paragraph.\n\nSecond paragraph.";
    let output = processor.process(text).unwrap();

    assert_eq!(output.chunks.len(), 2);
    let second = &output.chunks[1];
    assert_eq!(second.content, "Second paragraph.");
    assert_eq!(&text[second.start_offset..second.end_offset], "Second paragraph.");
    assert_eq!(output.metadata.strategy, Strategy::Recursive);
    assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
    assert_eq!(output.metadata.bytes_processed, text.len());
    assert_eq!(output.metadata.parent_count, None);
}

#[test]
fn test_fixed_processor_uses_first_separator() {
    let processor = SplitProcessorBuilder::new()
        .strategy(Strategy::Fixed)
        .chunk_size(12)
        .overlap_size(0)
        .separators(["|", "\n"])
        .build()
        .unwrap();
    let chunks = processor.split("alpha|beta|gamma|delta").unwrap();
    let contents: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["alpha|beta", "gamma|delta"]);
    assert_eq!(chunks[1].start_offset, 11);
}

#[test]
fn test_collapsed_separators_keep_spans_on_char_boundaries() {
    let processor = SplitProcessorBuilder::new()
        .strategy(Strategy::Fixed)
        .chunk_size(10)
        .overlap_size(0)
        .separators(["\n\n"])
        .build()
        .unwrap();
    let text = "日\n\n\n\n日";
    let output = processor.process(text).unwrap();

    assert_eq!(output.chunks.len(), 1);
    let chunk = &output.chunks[0];
    assert_eq!(chunk.content, "日\n\n日");
    assert_eq!(output.metadata.offset_misses, 1);
    assert!(text.is_char_boundary(chunk.start_offset));
    assert!(text.is_char_boundary(chunk.end_offset));
    assert_eq!(&text[chunk.start_offset..chunk.end_offset], "日\n\n\n\n");
}

#[test]
fn test_builder_fixed_strategy_swaps_default_separators() {
    let processor = SplitProcessorBuilder::new()
        .strategy(Strategy::Fixed)
        .build()
        .unwrap();
    assert_eq!(processor.config().separators, vec!["\n\n"]);
}

#[test]
fn test_parent_child_metadata() {
    let text = "word ".repeat(200);
    let processor = SplitProcessorBuilder::new()
        .strategy(Strategy::ParentChild)
        .chunk_size(100)
        .overlap_size(10)
        .execution_mode(ExecutionMode::Sequential)
        .build()
        .unwrap();
    let output = processor.process(&text).unwrap();

    let parents = output.metadata.parent_count.unwrap();
    assert!(parents >= 5);
    assert!(output.chunks.len() > parents);
    assert!(output.chunks.iter().all(|c| c.parent_id.is_some()));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parent_child_parallel_matches_sequential() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(100);
    let build = |mode| {
        SplitProcessorBuilder::new()
            .strategy(Strategy::ParentChild)
            .chunk_size(80)
            .overlap_size(10)
            .execution_mode(mode)
            .threads(Some(2))
            .build()
            .unwrap()
    };

    let sequential = build(ExecutionMode::Sequential).process(&text).unwrap();
    let parallel = build(ExecutionMode::Parallel).process(&text).unwrap();

    assert_eq!(sequential.chunks, parallel.chunks);
    assert_eq!(parallel.metadata.execution_mode, ExecutionMode::Parallel);
}

#[test]
fn test_single_character_and_tiny_chunk_size() {
    let processor = SplitProcessorBuilder::new()
        .chunk_size(1)
        .overlap_size(0)
        .build()
        .unwrap();
    let chunks = processor.split("x").unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!((chunks[0].start_offset, chunks[0].end_offset), (0, 1));
}
