//! Shared library for `course_fees`
//! Contains the course catalog, fee calculator and supporting screens used by the CLI

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
