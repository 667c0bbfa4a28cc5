//! Basic tests for ragsplit-core

use ragsplit_core::*;

const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[test]
fn test_params_validation() {
    assert!(SplitParams::new(500, 50).is_ok());
    assert_eq!(SplitParams::new(0, 0), Err(CoreError::ZeroChunkSize));
    assert!(matches!(
        SplitParams::new(10, 20),
        Err(CoreError::OverlapTooLarge { .. })
    ));
}

#[test]
fn test_error_display() {
    let err = SplitParams::new(10, 10).unwrap_err();
    assert_eq!(
        err.to_string(),
        "overlap (10) must be smaller than chunk size (10)"
    );
}

#[test]
fn test_fixed_paragraphs() {
    let text = "Para one.\n\nPara two.\n\nPara three is here.";
    let splitter = FixedSplitter::new(SplitParams::new(20, 0).unwrap(), "\n\n");
    let chunks = splitter.split(text);
    assert_eq!(chunks, vec!["Para one.\n\nPara two.", "Para three is here."]);
}

#[test]
fn test_recursive_respects_size_on_prose() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let splitter = RecursiveSplitter::new(SplitParams::new(60, 10).unwrap(), DEFAULT_SEPARATORS);
    let chunks = splitter.split(&text);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(char_len(chunk) <= 60, "chunk too long: {chunk:?}");
        assert!(text.contains(chunk.as_str()));
    }
}

#[test]
fn test_recursive_multibyte_budget_counts_chars() {
    let text = "日本語の文章です。".repeat(10);
    let splitter = RecursiveSplitter::new(SplitParams::new(12, 0).unwrap(), DEFAULT_SEPARATORS);
    let chunks = splitter.split(&text);

    for chunk in &chunks {
        assert!(char_len(chunk) <= 12);
    }
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_split_is_deterministic() {
    let text = "alpha beta\ngamma delta\n\nepsilon zeta eta theta";
    let splitter = RecursiveSplitter::new(SplitParams::new(15, 4).unwrap(), DEFAULT_SEPARATORS);
    assert_eq!(splitter.split(text), splitter.split(text));
}

#[test]
fn test_with_params_keeps_separators() {
    let splitter = RecursiveSplitter::new(SplitParams::new(15, 4).unwrap(), ["\n", " "]);
    let wider = splitter.with_params(SplitParams::new(30, 4).unwrap());
    assert_eq!(wider.separators(), splitter.separators());
    assert_eq!(wider.params().chunk_size, 30);
}

#[test]
fn test_trait_object_dispatch() {
    let params = SplitParams::new(10, 0).unwrap();
    let splitters: Vec<Box<dyn TextSplit>> = vec![
        Box::new(FixedSplitter::new(params, " ")),
        Box::new(RecursiveSplitter::new(params, DEFAULT_SEPARATORS)),
    ];
    for splitter in &splitters {
        assert!(!splitter.split("one two three four").is_empty());
    }
}
