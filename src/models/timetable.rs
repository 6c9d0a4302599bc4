//! Timetable (solution) model.
//!
//! A timetable is one conflict-free assignment of exactly one section
//! per (course, component) slot, restricted to a single duration window.
//! Timetables are produced by the generator and are read-only snapshots;
//! they are recomputed wholesale after every mutation, never patched.

use serde::{Deserialize, Serialize};

use super::{ComponentType, DurationWindow, Section};

/// One chosen section occupying a (course, component) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSlot {
    /// Course key the slot belongs to.
    pub course_code: String,
    /// Component type the slot fulfills.
    pub component: ComponentType,
    /// The chosen section.
    pub section: Section,
}

/// A complete conflict-free schedule for one duration window.
///
/// Slot order mirrors generation order: courses by store insertion
/// order, components in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Duration window every chosen section belongs to.
    pub duration: DurationWindow,
    /// One section per (course, component) slot.
    pub slots: Vec<TimetableSlot>,
}

impl Timetable {
    /// Number of filled slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The section chosen for a (course, component) slot, if present.
    pub fn section_for(&self, course_code: &str, component: ComponentType) -> Option<&Section> {
        self.slots
            .iter()
            .find(|s| s.course_code == course_code && s.component == component)
            .map(|s| &s.section)
    }

    /// Audit check: no two chosen sections collide.
    ///
    /// The generator only emits conflict-free timetables; this exists
    /// for consumers and tests to verify the invariant independently.
    pub fn is_conflict_free(&self) -> bool {
        for (i, a) in self.slots.iter().enumerate() {
            for b in &self.slots[i + 1..] {
                if a.section.conflicts_with(&b.section) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeBlock, Weekday};

    fn window() -> DurationWindow {
        DurationWindow::new("2024-09-04", "2024-12-03", "2")
    }

    fn slot(course: &str, component: ComponentType, id: &str, start: u16, end: u16) -> TimetableSlot {
        TimetableSlot {
            course_code: course.into(),
            component,
            section: Section::new(id, component, window())
                .with_block(TimeBlock::new(Weekday::Monday, start, end)),
        }
    }

    #[test]
    fn test_section_for() {
        let t = Timetable {
            duration: window(),
            slots: vec![
                slot("COSC1P02", ComponentType::Lecture, "LEC 1", 600, 680),
                slot("MATH1P66", ComponentType::Lecture, "LEC 2", 700, 780),
            ],
        };

        assert_eq!(t.slot_count(), 2);
        assert_eq!(
            t.section_for("COSC1P02", ComponentType::Lecture).unwrap().id,
            "LEC 1"
        );
        assert!(t.section_for("COSC1P02", ComponentType::Lab).is_none());
        assert!(t.section_for("PHYS1P21", ComponentType::Lecture).is_none());
    }

    #[test]
    fn test_is_conflict_free() {
        let good = Timetable {
            duration: window(),
            slots: vec![
                slot("A", ComponentType::Lecture, "LEC 1", 600, 680),
                slot("B", ComponentType::Lecture, "LEC 1", 680, 760),
            ],
        };
        assert!(good.is_conflict_free());

        let bad = Timetable {
            duration: window(),
            slots: vec![
                slot("A", ComponentType::Lecture, "LEC 1", 600, 680),
                slot("B", ComponentType::Lecture, "LEC 1", 640, 720),
            ],
        };
        assert!(!bad.is_conflict_free());
    }

    #[test]
    fn test_empty_timetable_is_conflict_free() {
        let t = Timetable {
            duration: window(),
            slots: vec![],
        };
        assert!(t.is_conflict_free());
        assert_eq!(t.slot_count(), 0);
    }
}
