//! Triage one random review and print the decision plus its audit record.
//!
//! Usage: `cargo run --example triage [reviews.tsv]`

use review_pipeline::{AuditRecord, PipelineResult, ReviewDataset, ReviewPipeline};
use std::path::Path;

fn main() -> PipelineResult<()> {
    tracing_subscriber::fmt::init();

    let dataset = match std::env::args().nth(1) {
        Some(path) => ReviewDataset::load(Path::new(&path))?,
        None => ReviewDataset::fallback(),
    };

    let pipeline = ReviewPipeline::lexical();
    let analysis = pipeline.analyze_random(&dataset, &mut rand::thread_rng())?;

    println!("review:   {}", analysis.text);
    println!(
        "sentiment: {} (confidence {:.2})",
        analysis.classification.label, analysis.classification.confidence
    );
    println!("decision: {}", analysis.decision);
    println!("audit:    {}", AuditRecord::new(&analysis).to_json()?);

    Ok(())
}
