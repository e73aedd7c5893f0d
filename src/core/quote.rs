//! Fee summary for a non-empty selection
//!
//! The calculator itself accepts an empty selection; a quote is what the
//! summary screen shows, so it refuses to be built without any course.

use crate::core::fees::{calculate, FeeBreakdown};
use crate::core::models::{Catalog, Course, Selection};
use crate::core::money::Money;
use thiserror::Error;

/// Reasons a quote cannot be prepared
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Nothing was selected
    #[error("Please select at least one course")]
    EmptySelection,
}

/// One priced row of a quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    /// Course identifier
    pub course_id: String,
    /// Course title
    pub title: String,
    /// Category label
    pub category: &'static str,
    /// Course price
    pub price: Money,
}

impl QuoteLine {
    fn from_course(course: &Course) -> Self {
        Self {
            course_id: course.id.clone(),
            title: course.title.clone(),
            category: course.category.label(),
            price: course.price(),
        }
    }
}

/// Priced selection with its fee breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Known courses in the selection, in identifier order
    pub lines: Vec<QuoteLine>,
    /// Selected identifiers not found in the catalog (priced at zero)
    pub unknown: Vec<String>,
    /// Fees for the whole selection
    pub fees: FeeBreakdown,
}

impl Quote {
    /// Price a selection against a catalog
    ///
    /// # Errors
    /// Returns [`QuoteError::EmptySelection`] when nothing is selected.
    pub fn prepare(selection: &Selection, catalog: &Catalog) -> Result<Self, QuoteError> {
        if selection.is_empty() {
            return Err(QuoteError::EmptySelection);
        }

        let mut lines = Vec::with_capacity(selection.len());
        let mut unknown = Vec::new();
        for id in selection.iter() {
            match catalog.get(id) {
                Some(course) => lines.push(QuoteLine::from_course(course)),
                None => unknown.push(id.to_string()),
            }
        }

        Ok(Self {
            lines,
            unknown,
            fees: calculate(selection, catalog),
        })
    }

    /// Number of selected entries, known or not
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.lines.len() + self.unknown.len()
    }
}
