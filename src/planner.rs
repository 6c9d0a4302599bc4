//! Planner facade.
//!
//! Ties the course store, pin registry, and generator together behind
//! the operations the presentation layer drives: add/remove courses,
//! set/clear pins, generate timetables, list durations.
//!
//! Recomputation is explicit: the planner holds no derived state and no
//! observers — the caller re-invokes [`Planner::generate`] after each
//! mutation. All operations run to completion synchronously; there is
//! no internal locking because a single logical caller drives state
//! transitions serially.

use log::debug;

use crate::error::{Error, Result};
use crate::generator::{self, DurationScope};
use crate::models::{ComponentType, Course, DurationWindow, Timetable};
use crate::pins::{Pin, PinRegistry};
use crate::store::CourseStore;
use crate::validation::validate_course;

/// In-memory timetabling session: added courses + pins + generation.
///
/// # Example
///
/// ```
/// use timetable_gen::generator::DurationScope;
/// use timetable_gen::models::{ComponentType, Course, DurationWindow, Section, TimeBlock, Weekday};
/// use timetable_gen::planner::Planner;
///
/// let term = DurationWindow::new("2024-09-04", "2024-12-03", "3");
/// let course = Course::new("COSC1P02").with_section(
///     Section::new("LEC 1", ComponentType::Lecture, term)
///         .with_block(TimeBlock::new(Weekday::Monday, 600, 680)),
/// );
///
/// let mut planner = Planner::new();
/// planner.add_course(course)?;
/// let timetables = planner.generate(&DurationScope::All)?;
/// assert_eq!(timetables.len(), 1);
/// # Ok::<(), timetable_gen::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    store: CourseStore,
    pins: PinRegistry,
}

impl Planner {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and adds a fetched course.
    ///
    /// # Errors
    /// [`Error::InvalidCourse`] if the course fails structural
    /// validation, [`Error::DuplicateCourse`] if its code is already
    /// added.
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        validate_course(&course).map_err(|errors| Error::InvalidCourse {
            course: course.code.clone(),
            errors,
        })?;
        self.store.add(course)
    }

    /// Removes a course and every pin referencing it.
    ///
    /// No-op if the course is absent.
    pub fn remove_course(&mut self, code: &str) {
        if self.store.remove(code).is_some() {
            self.pins.clear_for_course(code);
            debug!("removed course {code} and its pins");
        }
    }

    /// Pins a section choice for a (course, component) pair,
    /// overwriting any existing pin for the pair.
    ///
    /// # Errors
    /// [`Error::InvalidPin`] unless the referenced section exists under
    /// that course and component with the given duration label.
    pub fn set_pin(
        &mut self,
        code: &str,
        component: ComponentType,
        section_id: &str,
        duration: &str,
    ) -> Result<()> {
        let invalid = || Error::InvalidPin {
            course: code.to_string(),
            component,
            section: section_id.to_string(),
            duration: duration.to_string(),
        };

        let course = self.store.get(code).ok_or_else(invalid)?;
        let section = course
            .find_section(component, section_id)
            .filter(|s| s.duration.label == duration)
            .ok_or_else(invalid)?;

        let pin = Pin::new(section.id.clone(), section.duration.label.clone());
        self.pins.set(code, component, pin);
        Ok(())
    }

    /// Clears all pins belonging to a course.
    pub fn clear_pins_for_course(&mut self, code: &str) {
        self.pins.clear_for_course(code);
    }

    /// Clears every pin.
    pub fn clear_all_pins(&mut self) {
        self.pins.clear_all();
    }

    /// The active pin for a (course, component) pair, if any.
    pub fn pinned(&self, code: &str, component: ComponentType) -> Option<&Pin> {
        self.pins.get(code, component)
    }

    /// Enumerates every conflict-free timetable for the scoped durations.
    ///
    /// See [`generator::generate`] for ordering and error semantics.
    pub fn generate(&self, scope: &DurationScope) -> Result<Vec<Timetable>> {
        generator::generate(&self.store, &self.pins, scope)
    }

    /// Distinct duration windows across added courses, first-seen order.
    pub fn list_durations(&self) -> Vec<DurationWindow> {
        self.store.durations()
    }

    /// Read access to the added courses.
    pub fn store(&self) -> &CourseStore {
        &self.store
    }
}
