//! Fee summary rendering
//!
//! Renders a [`Quote`] as plain text for the terminal, or as Markdown or HTML
//! documents that can be saved and shared.

pub mod formats;

use crate::core::money::{format_currency, Money};
use crate::core::quote::Quote;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
///
/// Aggregates everything a fee summary needs, providing a single source of
/// truth for templates.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Priced selection being reported
    pub quote: &'a Quote,
    /// Symbol prefixed to amounts
    pub currency_symbol: &'a str,
    /// Organization issuing the summary
    pub organization: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(quote: &'a Quote, currency_symbol: &'a str, organization: &'a str) -> Self {
        Self {
            quote,
            currency_symbol,
            organization,
        }
    }

    /// Format an amount with the configured currency symbol
    #[must_use]
    pub fn money(&self, amount: Money) -> String {
        format_currency(amount, self.currency_symbol)
    }

    /// Number of selected courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.quote.course_count()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
