//! Typed screen routes
//!
//! Every screen and the parameters it needs are listed in [`Route`], so a
//! route with a missing or mistyped parameter cannot be built.

use crate::core::models::{Catalog, CourseCategory, Selection};
use std::fmt;
use thiserror::Error;

/// Errors from parsing a route path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No screen lives at this path
    #[error("No screen at path '{0}'")]
    NotFound(String),
    /// A course parameter names a course that is not in the catalog
    #[error("Unknown course: '{0}'")]
    UnknownCourse(String),
    /// The fee summary was requested without any course
    #[error("Fee summary needs at least one course")]
    MissingCourses,
}

/// A screen in the application together with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing screen with keyword search
    Home,
    /// Full catalog listing
    Courses,
    /// Listing of six-month courses
    SixMonthCourses,
    /// Listing of six-week courses
    SixWeekCourses,
    /// Detail page for one course
    CourseDetail {
        /// Identifier of the course shown
        course_id: String,
    },
    /// Course selection with live fee calculation
    FeeCalculator,
    /// Fee summary for a fixed set of courses
    FeeSummary {
        /// Identifiers of the selected courses
        course_ids: Vec<String>,
    },
    /// Contact form
    Contact,
    /// About the organization
    About,
    /// Login placeholder
    Login,
    /// Sign-up placeholder
    Signup,
}

const SUMMARY_PATH: &str = "/fees/summary";

/// Shortest word stem that search will match on
const MIN_STEM_LEN: usize = 3;

/// Suffixes dropped before comparing search words, longest first
const SEARCH_SUFFIXES: [&str; 4] = ["ing", "es", "s", "e"];

/// Keywords recognized by the landing-screen search, checked in order
const SEARCH_KEYWORDS: &[(&str, Route)] = &[
    ("six month", Route::SixMonthCourses),
    ("six week", Route::SixWeekCourses),
    ("course", Route::Courses),
    ("fee", Route::FeeCalculator),
    ("price", Route::FeeCalculator),
    ("quote", Route::FeeCalculator),
    ("calculat", Route::FeeCalculator),
    ("contact", Route::Contact),
    ("about", Route::About),
    ("login", Route::Login),
    ("log in", Route::Login),
    ("sign in", Route::Login),
    ("signup", Route::Signup),
    ("sign up", Route::Signup),
    ("register", Route::Signup),
    ("home", Route::Home),
];

impl Route {
    /// Screen name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Courses => "Courses",
            Self::SixMonthCourses => "SixMonthCourses",
            Self::SixWeekCourses => "SixWeekCourses",
            Self::CourseDetail { .. } => "CourseDetail",
            Self::FeeCalculator => "FeeCalculator",
            Self::FeeSummary { .. } => "FeeSummary",
            Self::Contact => "Contact",
            Self::About => "About",
            Self::Login => "Login",
            Self::Signup => "Signup",
        }
    }

    /// Listing route for a course category
    #[must_use]
    pub const fn for_category(category: CourseCategory) -> Self {
        match category {
            CourseCategory::SixMonth => Self::SixMonthCourses,
            CourseCategory::SixWeek => Self::SixWeekCourses,
        }
    }

    /// Fee summary route for a selection
    #[must_use]
    pub fn summary_of(selection: &Selection) -> Self {
        Self::FeeSummary {
            course_ids: selection.iter().map(str::to_string).collect(),
        }
    }

    /// Path form of the route (e.g. `/courses/first-aid`)
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Courses => "/courses".to_string(),
            Self::SixMonthCourses => format!("/courses/{}", CourseCategory::SixMonth.slug()),
            Self::SixWeekCourses => format!("/courses/{}", CourseCategory::SixWeek.slug()),
            Self::CourseDetail { course_id } => format!("/courses/{course_id}"),
            Self::FeeCalculator => "/fees".to_string(),
            Self::FeeSummary { course_ids } => {
                format!("{SUMMARY_PATH}?courses={}", course_ids.join(","))
            }
            Self::Contact => "/contact".to_string(),
            Self::About => "/about".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
        }
    }

    /// Parse a path, checking course parameters against the catalog
    ///
    /// # Errors
    /// Returns a [`RouteError`] when the path matches no screen, names an
    /// unknown course, or asks for a fee summary without courses.
    pub fn parse(path: &str, catalog: &Catalog) -> Result<Self, RouteError> {
        let path = path.trim();
        let (base, query) = path.split_once('?').unwrap_or((path, ""));
        let base = if base.len() > 1 {
            base.trim_end_matches('/')
        } else {
            base
        };

        if base == SUMMARY_PATH {
            return Self::parse_summary(query, catalog);
        }

        match base {
            "" | "/" => return Ok(Self::Home),
            "/courses" => return Ok(Self::Courses),
            "/fees" => return Ok(Self::FeeCalculator),
            "/contact" => return Ok(Self::Contact),
            "/about" => return Ok(Self::About),
            "/login" => return Ok(Self::Login),
            "/signup" => return Ok(Self::Signup),
            _ => {}
        }

        if let Some(rest) = base.strip_prefix("/courses/") {
            if let Ok(category) = rest.parse::<CourseCategory>() {
                return Ok(Self::for_category(category));
            }
            if rest.contains('/') {
                return Err(RouteError::NotFound(path.to_string()));
            }
            return if catalog.get(rest).is_some() {
                Ok(Self::CourseDetail {
                    course_id: rest.to_string(),
                })
            } else {
                Err(RouteError::UnknownCourse(rest.to_string()))
            };
        }

        Err(RouteError::NotFound(path.to_string()))
    }

    fn parse_summary(query: &str, catalog: &Catalog) -> Result<Self, RouteError> {
        let ids = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("courses="))
            .unwrap_or("");

        let mut course_ids: Vec<String> = Vec::new();
        for id in ids.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if catalog.get(id).is_none() {
                return Err(RouteError::UnknownCourse(id.to_string()));
            }
            if !course_ids.iter().any(|c| c == id) {
                course_ids.push(id.to_string());
            }
        }

        if course_ids.is_empty() {
            return Err(RouteError::MissingCourses);
        }
        Ok(Self::FeeSummary { course_ids })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.path())
    }
}

/// Resolve a landing-screen search keyword to a screen
///
/// Course titles and identifiers are matched first, then word prefixes of
/// course titles (so `landscape` finds Landscaping), then screen keywords.
/// Returns `None` when nothing matches.
#[must_use]
pub fn search(keyword: &str, catalog: &Catalog) -> Option<Route> {
    let needle = keyword.trim().to_lowercase().replace(['-', '_'], " ");
    if needle.is_empty() {
        return None;
    }

    let course = catalog
        .courses()
        .iter()
        .find(|c| c.title.to_lowercase().contains(&needle) || c.id.replace('-', " ") == needle)
        .or_else(|| {
            catalog
                .courses()
                .iter()
                .find(|c| words_prefix_title(&needle, &c.title))
        });
    if let Some(course) = course {
        return Some(Route::CourseDetail {
            course_id: course.id.clone(),
        });
    }

    SEARCH_KEYWORDS
        .iter()
        .find(|(word, _)| needle.contains(word))
        .map(|(_, route)| route.clone())
}

/// Drop one common suffix, keeping at least [`MIN_STEM_LEN`] characters
fn stem(word: &str) -> &str {
    SEARCH_SUFFIXES
        .iter()
        .filter_map(|suffix| word.strip_suffix(suffix))
        .find(|root| root.len() >= MIN_STEM_LEN)
        .unwrap_or(word)
}

/// Whether every word of `needle` is a prefix of some word of `title`,
/// both compared by stem
fn words_prefix_title(needle: &str, title: &str) -> bool {
    let title = title.to_lowercase().replace('-', " ");
    let title_stems: Vec<&str> = title.split_whitespace().map(stem).collect();
    needle.split_whitespace().map(stem).all(|word| {
        word.len() >= MIN_STEM_LEN && title_stems.iter().any(|t| t.starts_with(word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    #[test]
    fn test_paths_round_trip_for_every_screen() {
        let routes = vec![
            Route::Home,
            Route::Courses,
            Route::SixMonthCourses,
            Route::SixWeekCourses,
            Route::CourseDetail {
                course_id: "sewing".to_string(),
            },
            Route::FeeCalculator,
            Route::FeeSummary {
                course_ids: vec!["cooking".to_string(), "first-aid".to_string()],
            },
            Route::Contact,
            Route::About,
            Route::Login,
            Route::Signup,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path(), catalog()), Ok(route));
        }
    }

    #[test]
    fn test_parse_unknown_course() {
        assert_eq!(
            Route::parse("/courses/pottery", catalog()),
            Err(RouteError::UnknownCourse("pottery".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_path() {
        assert!(matches!(
            Route::parse("/team", catalog()),
            Err(RouteError::NotFound(_))
        ));
        assert!(matches!(
            Route::parse("/courses/sewing/extra", catalog()),
            Err(RouteError::NotFound(_))
        ));
    }

    #[test]
    fn test_parse_summary_requires_courses() {
        assert_eq!(
            Route::parse("/fees/summary", catalog()),
            Err(RouteError::MissingCourses)
        );
        assert_eq!(
            Route::parse("/fees/summary?courses=", catalog()),
            Err(RouteError::MissingCourses)
        );
    }

    #[test]
    fn test_parse_trailing_slash() {
        assert_eq!(Route::parse("/about/", catalog()), Ok(Route::About));
    }

    #[test]
    fn test_summary_of_selection() {
        let selection: Selection = ["sewing", "cooking"].into_iter().collect();
        assert_eq!(
            Route::summary_of(&selection).path(),
            "/fees/summary?courses=cooking,sewing"
        );
    }

    #[test]
    fn test_search_course_title() {
        assert_eq!(
            search("First Aid", catalog()),
            Some(Route::CourseDetail {
                course_id: "first-aid".to_string()
            })
        );
        assert_eq!(
            search("garden-maintenance", catalog()),
            Some(Route::CourseDetail {
                course_id: "garden-maintenance".to_string()
            })
        );
    }

    #[test]
    fn test_search_word_prefixes() {
        let detail = |id: &str| {
            Some(Route::CourseDetail {
                course_id: id.to_string(),
            })
        };
        assert_eq!(search("landscape", catalog()), detail("landscaping"));
        assert_eq!(search("cook", catalog()), detail("cooking"));
        assert_eq!(search("skill", catalog()), detail("life-skills"));
        assert_eq!(search("child mind", catalog()), detail("child-minding"));
        assert_eq!(search("garden maint", catalog()), detail("garden-maintenance"));
    }

    #[test]
    fn test_search_short_words_do_not_match_courses() {
        assert_eq!(search("us", catalog()), None);
        assert_eq!(search("contact us", catalog()), Some(Route::Contact));
    }

    #[test]
    fn test_search_screen_keywords() {
        assert_eq!(search("fees", catalog()), Some(Route::FeeCalculator));
        assert_eq!(search("Six-Month", catalog()), Some(Route::SixMonthCourses));
        assert_eq!(search("contact us", catalog()), Some(Route::Contact));
        assert_eq!(search("register", catalog()), Some(Route::Signup));
    }

    #[test]
    fn test_search_undefined_screens() {
        assert_eq!(search("team", catalog()), None);
        assert_eq!(search("portal", catalog()), None);
        assert_eq!(search("   ", catalog()), None);
    }
}
