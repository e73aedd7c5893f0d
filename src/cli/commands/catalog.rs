//! Catalog and course detail handlers

use course_fees::config::Config;
use course_fees::core::models::{Catalog, Course, CourseCategory};
use course_fees::core::money::format_currency;
use course_fees::core::navigation::Route;
use course_fees::{debug, error};
use std::fmt::Write;

const CATEGORIES: [CourseCategory; 2] = [CourseCategory::SixMonth, CourseCategory::SixWeek];

/// Print the catalog, optionally limited to one category
pub fn run_list(category: Option<CourseCategory>, config: &Config) {
    print!(
        "{}",
        render_list(Catalog::standard(), category, &config.pricing.currency_symbol)
    );
}

/// Print one course in full
///
/// Exits with status 1 for an unknown course.
pub fn run_detail(id: &str, config: &Config) {
    let catalog = Catalog::standard();
    match catalog.get(id) {
        Some(course) => print!(
            "{}",
            render_detail(course, &config.pricing.currency_symbol)
        ),
        None => {
            error!("course lookup failed: '{id}'");
            eprintln!("✗ Unknown course: '{id}'");
            eprintln!(
                "  Available courses: {}",
                catalog.ids().collect::<Vec<_>>().join(", ")
            );
            std::process::exit(1);
        }
    }
}

/// Catalog listing grouped by category
pub fn render_list(catalog: &Catalog, only: Option<CourseCategory>, symbol: &str) -> String {
    let mut out = String::new();
    for category in CATEGORIES.into_iter().filter(|c| only.map_or(true, |o| o == *c)) {
        debug!("listing {category} courses");
        let _ = writeln!(
            out,
            "\n=== {}s ({} each) ===",
            category.label(),
            format_currency(category.price(), symbol)
        );
        for course in catalog.by_category(category) {
            let _ = writeln!(out, "  {:<20} {}", course.id, course.title);
            let _ = writeln!(out, "  {:<20} {}", "", course.description);
        }
    }
    out
}

/// Full description of one course
pub fn render_detail(course: &Course, symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {} ===", course.title);
    let _ = writeln!(out, "Category: {}", course.category.label());
    let _ = writeln!(out, "Fees: {}", format_currency(course.price(), symbol));
    let _ = writeln!(out, "Purpose: {}", course.purpose);
    let _ = writeln!(out, "Content:");
    for topic in &course.content {
        let _ = writeln!(out, "  • {topic}");
    }
    let route = Route::CourseDetail {
        course_id: course.id.clone(),
    };
    let _ = writeln!(out, "Screen: {}", route.path());
    out
}
