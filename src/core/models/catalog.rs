//! The compiled-in course catalog and price lookups

use super::course::{Course, CourseCategory};
use crate::core::money::Money;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Anything that can map a course identifier to a price
pub trait PriceLookup {
    /// Price for `id`, or `None` when the identifier is unknown
    fn price_of(&self, id: &str) -> Option<Money>;
}

impl PriceLookup for HashMap<String, Money> {
    fn price_of(&self, id: &str) -> Option<Money> {
        self.get(id).copied()
    }
}

/// Immutable list of courses keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(build_standard);

impl Catalog {
    /// Build a catalog from a list of courses
    ///
    /// Later entries with an identifier that is already present are dropped,
    /// so identifiers stay unique.
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        let mut unique: Vec<Course> = Vec::with_capacity(courses.len());
        for course in courses {
            if !unique.iter().any(|c| c.id == course.id) {
                unique.push(course);
            }
        }
        Self { courses: unique }
    }

    /// The organization's course catalog
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// All courses, in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Courses in the given category
    pub fn by_category(&self, category: CourseCategory) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(move |c| c.category == category)
    }

    /// All course identifiers
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|c| c.id.as_str())
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns `true` when the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl PriceLookup for Catalog {
    fn price_of(&self, id: &str) -> Option<Money> {
        self.get(id).map(Course::price)
    }
}

fn course(
    id: &str,
    title: &str,
    category: CourseCategory,
    description: &str,
    purpose: &str,
    topics: &[&str],
) -> Course {
    let mut c = Course::new(
        id.to_string(),
        title.to_string(),
        category,
        description.to_string(),
    )
    .with_purpose(purpose);
    for topic in topics {
        c.add_topic((*topic).to_string());
    }
    c
}

fn build_standard() -> Catalog {
    use CourseCategory::{SixMonth, SixWeek};

    Catalog::new(vec![
        course(
            "first-aid",
            "First Aid",
            SixMonth,
            "First aid awareness and basic life support.",
            "To provide first aid awareness and basic life support.",
            &[
                "Wounds and bleeding",
                "Burns and fractures",
                "Emergency scene management",
                "Cardio-Pulmonary Resuscitation (CPR)",
                "Respiratory distress e.g., Choking, blocked airway",
            ],
        ),
        course(
            "sewing",
            "Sewing",
            SixMonth,
            "Alterations and new garment tailoring services.",
            "To provide alterations and new garment tailoring services.",
            &[
                "Types of stitches",
                "Threading a sewing machine",
                "Sewing buttons, zips, hems and seams",
                "Alterations",
                "Designing and sewing new garments",
            ],
        ),
        course(
            "landscaping",
            "Landscaping",
            SixMonth,
            "Landscaping services for new and established gardens.",
            "To provide landscaping services for new and established gardens.",
            &[
                "Indigenous and exotic plants and trees",
                "Fixed structures (fountains, statues, benches, tables, built-in braai)",
                "Balancing of plants and trees in a garden",
                "Aesthetics of plant shapes and colours",
                "Garden layout",
            ],
        ),
        course(
            "life-skills",
            "Life Skills",
            SixMonth,
            "Skills to navigate basic life necessities.",
            "To provide skills to navigate basic life necessities.",
            &[
                "Opening a bank account",
                "Basic labour law (know your rights)",
                "Basic reading and writing literacy",
                "Basic numeric literacy",
            ],
        ),
        course(
            "child-minding",
            "Child Minding",
            SixWeek,
            "Basic child and baby care.",
            "To provide basic child and baby care.",
            &[
                "Birth to six-month old baby needs",
                "Seven-month to one year old needs",
                "Toddler needs",
                "Educational toys",
            ],
        ),
        course(
            "cooking",
            "Cooking",
            SixWeek,
            "Preparing and cooking nutritious family meals.",
            "To prepare and cook nutritious family meals.",
            &[
                "Nutritional requirements for a healthy body",
                "Types of protein, carbohydrates and vegetables",
                "Planning meals",
                "Tasty and nutritious recipes",
                "Preparation and cooking of meals",
            ],
        ),
        course(
            "garden-maintenance",
            "Garden Maintenance",
            SixWeek,
            "Watering, pruning and planting in a domestic garden.",
            "To provide basic knowledge of watering, pruning and planting in a domestic garden.",
            &[
                "Water restrictions and the watering requirements of indigenous and exotic plants",
                "Pruning and propagation of plants",
                "Planting techniques for different plant types",
            ],
        ),
    ])
}
