//! Selection set of course identifiers

use std::collections::BTreeSet;

/// The set of courses a user has picked in the current session
///
/// Only changed through explicit add/remove/toggle calls and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Add the course if absent, remove it if present
    ///
    /// # Returns
    /// `true` if the course is selected after the call
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Select a course. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Deselect a course. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Whether a course is selected
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected identifiers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();

        assert!(selection.toggle("sewing"));
        assert!(selection.contains("sewing"));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle("sewing"));
        assert!(!selection.contains("sewing"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_insert_is_set_semantics() {
        let mut selection = Selection::new();
        assert!(selection.insert("cooking"));
        assert!(!selection.insert("cooking"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut selection = Selection::new();
        assert!(!selection.remove("cooking"));
    }

    #[test]
    fn test_clear() {
        let mut selection: Selection = ["a", "b", "c"].into_iter().collect();
        assert_eq!(selection.len(), 3);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_iter_sorted() {
        let selection: Selection = ["sewing", "cooking", "first-aid"].into_iter().collect();
        let ids: Vec<&str> = selection.iter().collect();
        assert_eq!(ids, vec!["cooking", "first-aid", "sewing"]);
    }
}
