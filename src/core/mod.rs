//! Core module for the course catalog and fee calculation

pub mod about;
pub mod config;
pub mod fees;
pub mod forms;
pub mod models;
pub mod money;
pub mod navigation;
pub mod quote;
pub mod report;

/// Returns the current version of the `course_fees` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
