//! Integration tests for typed routes and keyword search

use course_fees::core::models::{Catalog, CourseCategory};
use course_fees::core::navigation::{search, Route, RouteError};

#[test]
fn every_course_has_a_detail_route() {
    let catalog = Catalog::standard();
    for course in catalog.courses() {
        let route = Route::CourseDetail {
            course_id: course.id.clone(),
        };
        assert_eq!(Route::parse(&route.path(), catalog), Ok(route));
        assert!(matches!(
            search(&course.title, catalog),
            Some(Route::CourseDetail { course_id }) if course_id == course.id
        ));
    }
}

#[test]
fn category_routes() {
    let catalog = Catalog::standard();
    assert_eq!(
        Route::parse("/courses/six-week", catalog),
        Ok(Route::for_category(CourseCategory::SixWeek))
    );
}

#[test]
fn summary_route_rejects_unknown_course() {
    assert_eq!(
        Route::parse("/fees/summary?courses=sewing,pottery", Catalog::standard()),
        Err(RouteError::UnknownCourse("pottery".to_string()))
    );
}

#[test]
fn summary_route_dedupes() {
    assert_eq!(
        Route::parse("/fees/summary?courses=sewing,sewing", Catalog::standard()),
        Ok(Route::FeeSummary {
            course_ids: vec!["sewing".to_string()]
        })
    );
}
