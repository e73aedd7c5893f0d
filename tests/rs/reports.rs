//! Integration tests for writing fee summaries to disk

use course_fees::core::models::{Catalog, Selection};
use course_fees::core::quote::Quote;
use course_fees::core::report::{reporter_for, ReportContext, ReportFormat};
use std::fs;
use tempfile::TempDir;

fn quote() -> Quote {
    let selection: Selection = ["first-aid", "sewing", "landscaping"].into_iter().collect();
    Quote::prepare(&selection, Catalog::standard()).expect("non-empty selection")
}

#[test]
fn each_format_writes_its_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let quote = quote();
    let ctx = ReportContext::new(&quote, "R", "Empowering the Nation");

    for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Html] {
        let path = temp_dir
            .path()
            .join(format!("summary.{}", format.extension()));
        reporter_for(format)
            .generate(&ctx, &path)
            .expect("report should be written");

        let content = fs::read_to_string(&path).expect("Failed to read report");
        assert!(content.contains("R4500.00"), "{format} subtotal");
        assert!(content.contains("10%"), "{format} rate");
        assert!(content.contains("R450.00"), "{format} discount");
        assert!(content.contains("R4050.00"), "{format} total");
    }
}

#[test]
fn generate_fails_for_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let quote = quote();
    let ctx = ReportContext::new(&quote, "R", "Org");
    let path = temp_dir.path().join("missing").join("summary.md");

    assert!(reporter_for(ReportFormat::Markdown)
        .generate(&ctx, &path)
        .is_err());
}
