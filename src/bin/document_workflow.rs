//! Document Review Workflow
//!
//! Walks a document through drafting, a failed review, a second
//! submission and publication, including the calls each state rejects.
//!
//! Run with: cargo run --bin document_workflow

use statecraft::document::Document;
use statecraft::logging;
use statecraft::SnapshotError;
use tracing::debug;

fn main() -> Result<(), SnapshotError> {
    logging::init();

    println!("=== Document Review Workflow ===\n");

    let mut doc = Document::new("AAA");
    report(&doc);

    doc.write(" BBB");
    report(&doc);

    doc.review_passed();
    report(&doc);

    doc.publish();
    report(&doc);

    doc.write(" CCC");
    report(&doc);

    doc.review_failed();
    report(&doc);

    doc.write(" DDD");
    report(&doc);

    doc.publish();
    report(&doc);

    doc.review_passed();
    report(&doc);

    doc.publish();
    report(&doc);

    let path: Vec<String> = doc
        .history()
        .get_path()
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("Path: {}", path.join(" -> "));

    let snapshot = doc.snapshot().to_json()?;
    debug!(snapshot = %snapshot, "final snapshot");

    println!("\n=== Workflow Complete ===");
    Ok(())
}

fn report(doc: &Document) {
    println!("  [{}] {:?}\n", doc.state_name(), doc.content());
}
