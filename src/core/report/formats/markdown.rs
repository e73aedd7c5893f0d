//! Markdown report generator
//!
//! Generates fee summaries as Markdown tables. These render well in GitHub,
//! GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/quote.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();
        let fees = &ctx.quote.fees;

        output = output.replace("{{organization}}", ctx.organization);
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{course_rows}}", &Self::generate_course_rows(ctx));
        output = output.replace("{{unknown_courses}}", &Self::generate_unknown_note(ctx));

        output = output.replace("{{subtotal}}", &ctx.money(fees.subtotal));
        output = output.replace("{{discount_rate}}", &fees.discount_rate.to_string());
        output = output.replace("{{discount_amount}}", &ctx.money(fees.discount_amount));
        output = output.replace("{{total}}", &ctx.money(fees.total));

        output
    }

    /// One table row per known course, without a trailing newline
    fn generate_course_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();
        for line in &ctx.quote.lines {
            let _ = writeln!(
                rows,
                "| {} | {} | {} |",
                line.title,
                line.category,
                ctx.money(line.price)
            );
        }
        rows.trim_end().to_string()
    }

    fn generate_unknown_note(ctx: &ReportContext) -> String {
        if ctx.quote.unknown.is_empty() {
            String::new()
        } else {
            format!(
                "\n> ⚠️ Not in the catalog (priced at zero): {}\n",
                ctx.quote.unknown.join(", ")
            )
        }
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Selection};
    use crate::core::quote::Quote;

    #[test]
    fn test_markdown_contains_rows_and_totals() {
        let selection: Selection = ["first-aid", "cooking"].into_iter().collect();
        let quote = Quote::prepare(&selection, Catalog::standard()).unwrap();
        let ctx = ReportContext::new(&quote, "R", "Empowering the Nation");

        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.starts_with("# Empowering the Nation fee summary"));
        assert!(md.contains("| First Aid | Six-month course | R1500.00 |"));
        assert!(md.contains("| Cooking | Six-week course | R750.00 |"));
        assert!(md.contains("| Discount (5%) | -R112.50 |"));
        assert!(md.contains("| **Total** | **R2137.50** |"));
        assert!(!md.contains("{{"));
        assert!(!md.contains("Not in the catalog"));
    }
}
