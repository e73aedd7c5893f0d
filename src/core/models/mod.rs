//! Data models for `course_fees`

pub mod catalog;
pub mod course;
pub mod selection;

pub use catalog::{Catalog, PriceLookup};
pub use course::{Course, CourseCategory};
pub use selection::Selection;
