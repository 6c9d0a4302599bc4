//! Error types for timetable generation.
//!
//! All failures are synchronous data-integrity errors surfaced to the
//! caller; nothing inside the core is retried or swallowed. The generator
//! is atomic: it returns the full timetable list or an error, never a
//! partial emission.

use thiserror::Error;

use crate::models::ComponentType;
use crate::validation::ValidationError;

/// Result type for timetable-gen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mutating the store or generating timetables.
#[derive(Debug, Error)]
pub enum Error {
    /// A course with the same identifier is already in the store.
    /// The store never silently overwrites.
    #[error("course {0} is already added")]
    DuplicateCourse(String),

    /// A pin references a section or duration not present in the store.
    ///
    /// Raised at `set_pin` time, and again fail-fast during generation if
    /// a registry pin no longer matches any candidate section.
    #[error("pin for {course} {component} matches no section (section {section}, duration D{duration})")]
    InvalidPin {
        /// Course key the pin belongs to.
        course: String,
        /// Component type the pin constrains.
        component: ComponentType,
        /// Section id the pin forces.
        section: String,
        /// Duration label the pin is scoped to.
        duration: String,
    },

    /// A caller-supplied course code does not match `"<dept> <number> D<duration>"`.
    #[error("malformed course code {0:?}: expected \"<dept> <number> D<duration>\", e.g. \"COSC 1P02 D2\"")]
    MalformedCourseCode(String),

    /// A course failed structural validation before insertion.
    ///
    /// All detected issues are collected, not just the first.
    #[error("course {course} failed validation with {} issue(s)", .errors.len())]
    InvalidCourse {
        /// Course key that failed.
        course: String,
        /// Every issue found by [`crate::validation::validate_course`].
        errors: Vec<ValidationError>,
    },
}
