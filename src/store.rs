//! Course store and duration index.
//!
//! Holds the set of courses the user has added. Insertion order is part
//! of the contract: it drives the deterministic slot order of the
//! generator, so the store is backed by an insertion-ordered map and
//! removal preserves the order of the survivors.
//!
//! The duration index is a derived view: a full rescan of all sections,
//! deduplicated in first-seen order. Recomputed on each call — the store
//! holds tens of courses, not millions, so no incremental cache.

use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};
use crate::models::{Course, DurationWindow};

/// Insertion-ordered set of added courses, keyed by course code.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    courses: IndexMap<String, Course>,
}

impl CourseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a course keyed by its code.
    ///
    /// # Errors
    /// [`Error::DuplicateCourse`] if the code is already present. The
    /// store never silently overwrites; callers pre-check with
    /// [`CourseStore::contains`] for a guarded no-op.
    pub fn add(&mut self, course: Course) -> Result<()> {
        if self.courses.contains_key(&course.code) {
            return Err(Error::DuplicateCourse(course.code.clone()));
        }
        self.courses.insert(course.code.clone(), course);
        Ok(())
    }

    /// Removes a course by code. No-op (returns `None`) if absent.
    ///
    /// Surviving courses keep their relative insertion order.
    pub fn remove(&mut self, code: &str) -> Option<Course> {
        self.courses.shift_remove(code)
    }

    /// Looks up a course by code.
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Whether a course with this code is present.
    pub fn contains(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    /// All courses, in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Distinct duration windows across all sections, first-seen order.
    ///
    /// First-seen follows the deterministic traversal: courses in
    /// insertion order, components in canonical order, sections in
    /// listing order.
    pub fn durations(&self) -> Vec<DurationWindow> {
        let mut seen: IndexSet<DurationWindow> = IndexSet::new();
        for course in self.all() {
            for section in course.all_sections() {
                seen.insert(section.duration.clone());
            }
        }
        seen.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentType, Section};

    fn half(label: &str) -> DurationWindow {
        match label {
            "1" => DurationWindow::new("2024-09-04", "2024-10-25", "1"),
            _ => DurationWindow::new("2024-10-28", "2024-12-03", "2"),
        }
    }

    fn course(code: &str, duration: &DurationWindow) -> Course {
        Course::new(code).with_section(Section::new(
            "LEC 1",
            ComponentType::Lecture,
            duration.clone(),
        ))
    }

    #[test]
    fn test_add_and_get() {
        let mut store = CourseStore::new();
        store.add(course("COSC1P02", &half("2"))).unwrap();

        assert!(store.contains("COSC1P02"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("COSC1P02").unwrap().code, "COSC1P02");
        assert!(store.get("MATH1P66").is_none());
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut store = CourseStore::new();
        store.add(course("COSC1P02", &half("2"))).unwrap();

        let err = store.add(course("COSC1P02", &half("2"))).unwrap_err();
        assert!(matches!(err, Error::DuplicateCourse(code) if code == "COSC1P02"));
        assert_eq!(store.len(), 1); // original untouched
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = CourseStore::new();
        assert!(store.remove("COSC1P02").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut store = CourseStore::new();
        for code in ["A", "B", "C", "D"] {
            store.add(course(code, &half("2"))).unwrap();
        }

        let removed = store.remove("B").unwrap();
        assert_eq!(removed.code, "B");

        let order: Vec<_> = store.all().map(|c| c.code.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_durations_dedup_first_seen() {
        let d1 = half("1");
        let d2 = half("2");

        let mut store = CourseStore::new();
        store.add(course("A", &d2)).unwrap();
        store.add(course("B", &d1)).unwrap();
        store
            .add(
                Course::new("C")
                    .with_section(Section::new("LEC 1", ComponentType::Lecture, d2.clone()))
                    .with_section(Section::new("LAB 1", ComponentType::Lab, d1.clone())),
            )
            .unwrap();

        // d2 seen first (course A), then d1 (course B); C adds nothing new
        assert_eq!(store.durations(), vec![d2, d1]);
    }

    #[test]
    fn test_durations_empty_store() {
        assert!(CourseStore::new().durations().is_empty());
    }
}
