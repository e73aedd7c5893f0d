//! Integration smoke tests for `course_fees`

use course_fees::core::models::Catalog;
use course_fees::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn standard_catalog_is_loaded() {
    assert!(!Catalog::standard().is_empty());
}
