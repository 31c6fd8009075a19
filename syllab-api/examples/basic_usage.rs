//! Basic usage of the hyphenation API against the bundled fixture patterns

use syllab_api::{Config, EntityHyphen, Hyphenator, SoftHyphen, Threshold};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let patterns_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/patterns");

    // Method 1: Words
    println!("=== Method 1: Words ===");
    let config = Config::builder()
        .language("en-test")
        .patterns_dir(patterns_dir)
        .build()?;
    let mut hyphenator = Hyphenator::with_config(config)?;
    for word in ["Supercalifragilisticexpialidocious", "Inexplicable", "table"] {
        println!("  {word} → {}", hyphenator.hyphenate_word(word));
    }

    // Method 2: Running text with different joiners
    println!("\n=== Method 2: Running Text ===");
    let text = "Redundant, punctuation...";
    println!("  {}", hyphenator.hyphenate_text(text));
    hyphenator.set_hyphen(EntityHyphen);
    println!("  {}", hyphenator.hyphenate_text(text));
    hyphenator.set_hyphen(SoftHyphen);
    println!("  {:?}", hyphenator.hyphenate_text(text));

    // Method 3: Thresholds
    println!("\n=== Method 3: Thresholds ===");
    for threshold in Threshold::TIERS {
        hyphenator.set_threshold(threshold);
        println!("  {threshold:>8}: {:?}", hyphenator.split_word("punctuation"));
    }

    // Method 4: Per-word detail
    println!("\n=== Method 4: Processing Output ===");
    let output = hyphenator.process_text("Inexplicable associate")?;
    println!(
        "  {} words, {} breaks in {}ms",
        output.metadata.word_count, output.metadata.break_count, output.metadata.processing_time_ms
    );

    Ok(())
}
