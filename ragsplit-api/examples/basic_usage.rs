//! Basic usage of the ragsplit API

use ragsplit_api::{
    highlight_segments, process_text, split_corpus, BatchPlan, Config, Corpus, Document,
    IndexNamespace, Strategy, TextSplitter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Retrieval-augmented generation pairs a search step with a language model.\n\n\
                The search step needs chunks: small enough to match a question precisely, \
                large enough to carry the context the answer depends on.\n\n\
                Overlap repeats a little text across chunk borders so a sentence cut in two \
                is still found whole in one of them.";

    // Method 1: Convenience function with the default recursive strategy
    println!("=== Method 1: Convenience Function ===");
    let output = process_text(text)?;
    println!("{} chunk(s), average {} chars", output.stats.chunk_count, output.stats.average_chars);

    // Method 2: Explicit configuration
    println!("\n=== Method 2: Custom Configuration ===");
    let splitter = Config::builder()
        .strategy(Strategy::Recursive)
        .chunk_size(120)
        .overlap_size(20)
        .build_processor()?;
    let output = splitter.process_text(text)?;
    for chunk in &output.chunks {
        println!(
            "  {} [{}..{}] {:?}",
            chunk.id, chunk.start_offset, chunk.end_offset, chunk.content
        );
    }

    // Method 3: Highlight segments over the source
    println!("\n=== Method 3: Highlight Segments ===");
    for segment in highlight_segments(text, &output.chunks) {
        let label = segment
            .chunk_index
            .map_or_else(|| "gap".to_string(), |i| format!("chunk {i}"));
        println!("  {label}: {} bytes", segment.end - segment.start);
    }

    // Method 4: Parent-child splitting
    println!("\n=== Method 4: Parent-Child ===");
    let output = TextSplitter::with_strategy(Strategy::ParentChild)?.process_text(text)?;
    println!(
        "{} children under {} parent(s)",
        output.len(),
        output.metadata.parent_count.unwrap_or(0)
    );

    // Method 5: Corpus splitting and embedding batches
    println!("\n=== Method 5: Corpus ===");
    let corpus: Corpus = vec![
        Document::new("intro", text),
        Document::new("faq", "What is a chunk?\n\nA slice of a document."),
    ]
    .into_iter()
    .collect();
    let config = Config::builder().chunk_size(300).overlap_size(50).build()?;
    let chunks = split_corpus(&corpus, &config)?;
    let plan = BatchPlan::default();
    for batch in plan.batches(&chunks) {
        println!("  batch {} with {} chunk(s), {}% done", batch.index, batch.items.len(), batch.progress());
    }
    let namespace = IndexNamespace::new("adv-rag", "demo-session");
    println!("  index name: {}", namespace.index_name(1_700_000_000_000));

    Ok(())
}
