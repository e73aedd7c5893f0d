//! Quote command handler
//!
//! Prices a set of courses and prints or writes the fee summary.

use course_fees::config::Config;
use course_fees::core::models::{Catalog, Selection};
use course_fees::core::quote::Quote;
use course_fees::core::report::{reporter_for, ReportContext, ReportFormat};
use course_fees::{error, info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default file stem for written summaries
const SUMMARY_FILE_STEM: &str = "fee_summary";

/// Run the quote command.
///
/// Exits with status 1 when nothing is selected, the format is unknown or the
/// summary cannot be written.
///
/// # Arguments
/// * `course_ids` - Selected course identifiers
/// * `format_str` - Summary format (text, markdown, html)
/// * `output_file` - Optional output path
/// * `config` - Configuration with the currency symbol and reports directory
pub fn run(course_ids: &[String], format_str: &str, output_file: Option<&Path>, config: &Config) {
    match generate(course_ids, format_str, output_file, config) {
        Ok(Some(path)) => {
            println!("✓ Fee summary written to: {}", path.display());
            info!("Fee summary exported to: {}", path.display());
        }
        Ok(None) => {}
        Err(err) => {
            error!("Quote failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Build the summary and either print it or write it to a file
///
/// # Returns
/// The written path, or `None` when the summary was printed
fn generate(
    course_ids: &[String],
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<Option<PathBuf>, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: text, markdown, or html"))?;

    let selection: Selection = course_ids.iter().collect();
    let quote = Quote::prepare(&selection, Catalog::standard()).map_err(|e| format!("ℹ {e}"))?;
    for id in &quote.unknown {
        warn!("'{id}' is not in the catalog and adds nothing to the subtotal");
    }

    let ctx = ReportContext::new(
        &quote,
        &config.pricing.currency_symbol,
        &config.pricing.organization,
    );
    let reporter = reporter_for(format);

    let Some(output_path) = output_path(format, output_file, config)? else {
        let text = reporter
            .render(&ctx)
            .map_err(|e| format!("✗ Failed to render {format} summary: {e}"))?;
        print!("{text}");
        return Ok(None);
    };

    reporter
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {format} summary: {e}"))?;
    Ok(Some(output_path))
}

/// Where to write the summary; `None` means print to stdout
fn output_path(
    format: ReportFormat,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<Option<PathBuf>, String> {
    if let Some(output) = output_file {
        return Ok(Some(output.to_path_buf()));
    }
    if format == ReportFormat::Text {
        return Ok(None);
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(Some(reports_dir.join(format!(
        "{SUMMARY_FILE_STEM}.{}",
        format.extension()
    ))))
}
