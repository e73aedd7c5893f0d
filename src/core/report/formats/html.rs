//! HTML report generator
//!
//! Generates a self-contained HTML fee summary with embedded CSS, rendered
//! through an askama template.

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// Course row as shown in the HTML table
struct HtmlRow {
    title: String,
    category: &'static str,
    price: String,
}

#[derive(Template)]
#[template(path = "quote.html")]
struct QuoteHtml<'a> {
    organization: &'a str,
    course_count: usize,
    rows: Vec<HtmlRow>,
    unknown: &'a [String],
    subtotal: String,
    discount_rate: String,
    discount_amount: String,
    total: String,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_template<'a>(ctx: &ReportContext<'a>) -> QuoteHtml<'a> {
        let fees = &ctx.quote.fees;
        QuoteHtml {
            organization: ctx.organization,
            course_count: ctx.course_count(),
            rows: ctx
                .quote
                .lines
                .iter()
                .map(|line| HtmlRow {
                    title: line.title.clone(),
                    category: line.category,
                    price: ctx.money(line.price),
                })
                .collect(),
            unknown: &ctx.quote.unknown,
            subtotal: ctx.money(fees.subtotal),
            discount_rate: fees.discount_rate.to_string(),
            discount_amount: ctx.money(fees.discount_amount),
            total: ctx.money(fees.total),
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build_template(ctx).render()?)
    }
}
