//! Course model

use crate::core::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course length category; each category carries a fixed price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseCategory {
    /// Six-month learnership, priced at 1500
    SixMonth,
    /// Six-week short skills course, priced at 750
    SixWeek,
}

impl CourseCategory {
    /// Fixed price for every course in this category
    #[must_use]
    pub const fn price(self) -> Money {
        match self {
            Self::SixMonth => Money::from_units(1500),
            Self::SixWeek => Money::from_units(750),
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SixMonth => "Six-month course",
            Self::SixWeek => "Six-week course",
        }
    }

    /// Identifier form used on the command line and in routes
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::SixMonth => "six-month",
            Self::SixWeek => "six-week",
        }
    }
}

impl FromStr for CourseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "six-month" | "6-month" | "sixmonth" => Ok(Self::SixMonth),
            "six-week" | "6-week" | "sixweek" => Ok(Self::SixWeek),
            _ => Err(format!("Unknown course category: {s}")),
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A course offered in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier (e.g. "first-aid")
    pub id: String,

    /// Display title (e.g. "First Aid")
    pub title: String,

    /// Length category, which also fixes the price
    pub category: CourseCategory,

    /// Short description shown in listings
    pub description: String,

    /// What the course prepares the learner for
    pub purpose: String,

    /// Topics covered
    pub content: Vec<String>,
}

impl Course {
    /// Create a new course with no purpose or content yet
    ///
    /// # Arguments
    /// * `id` - Unique course identifier
    /// * `title` - Display title
    /// * `category` - Length category
    /// * `description` - Short description
    #[must_use]
    pub const fn new(id: String, title: String, category: CourseCategory, description: String) -> Self {
        Self {
            id,
            title,
            category,
            description,
            purpose: String::new(),
            content: Vec::new(),
        }
    }

    /// Set the course purpose
    #[must_use]
    pub fn with_purpose(mut self, purpose: &str) -> Self {
        self.purpose = purpose.to_string();
        self
    }

    /// Add a topic to the course content, ignoring duplicates
    pub fn add_topic(&mut self, topic: String) {
        if !self.content.contains(&topic) {
            self.content.push(topic);
        }
    }

    /// Price of the course, fixed by its category
    #[must_use]
    pub const fn price(&self) -> Money {
        self.category.price()
    }
}
