//! Route and search handlers

use course_fees::core::models::Catalog;
use course_fees::core::navigation::{search, Route, RouteError};
use course_fees::{info, warn};

/// Resolve a path to a screen and print it
///
/// Exits with status 1 when the path matches no screen.
pub fn run_route(path: &str) {
    match resolve(path) {
        Ok(route) => println!("✓ {route}"),
        Err(e) => {
            warn!("route lookup failed for '{path}': {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Search for a keyword and print the matching screen
pub fn run_search(keywords: &[String]) {
    let keyword = keywords.join(" ");
    match search(&keyword, Catalog::standard()) {
        Some(route) => {
            info!("search '{keyword}' resolved to {}", route.name());
            println!("✓ {route}");
        }
        None => println!("ℹ No course or screen matches '{keyword}'"),
    }
}

fn resolve(path: &str) -> Result<Route, RouteError> {
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Route::parse(&normalized, Catalog::standard())
}
