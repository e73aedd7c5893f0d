//! Plain-text report generator for terminal output

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Plain-text report generator with aligned columns
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        let title_width = ctx
            .quote
            .lines
            .iter()
            .map(|l| l.title.len())
            .max()
            .unwrap_or(0)
            .max("Course".len());

        writeln!(out, "=== {} fee summary ===\n", ctx.organization)?;
        writeln!(out, "{:<title_width$}  {:<16}  {:>10}", "Course", "Category", "Price")?;
        for line in &ctx.quote.lines {
            writeln!(
                out,
                "{:<title_width$}  {:<16}  {:>10}",
                line.title,
                line.category,
                ctx.money(line.price)
            )?;
        }
        for id in &ctx.quote.unknown {
            writeln!(out, "⚠️  '{id}' is not in the catalog (priced at zero)")?;
        }

        writeln!(out)?;
        for (label, value) in ctx.quote.fees.summary_lines(ctx.currency_symbol) {
            writeln!(out, "{label:<14} {value:>12}")?;
        }
        Ok(out)
    }
}
