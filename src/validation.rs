//! Structural validation for caller-supplied course data.
//!
//! Courses arrive from an external fetch collaborator; this module
//! checks their integrity before they enter the store. Detects:
//! - Courses with no sections
//! - Blank section identifiers
//! - Duplicate section identifiers (across all components)
//! - Degenerate time blocks (`end <= start`, or `end` past midnight)
//!
//! All issues are collected and reported together, not first-failure.

use crate::models::Course;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The course has no sections at all.
    EmptyCourse,
    /// A section has an empty identifier.
    BlankSectionId,
    /// Two sections share the same identifier.
    DuplicateSectionId,
    /// A time block is inverted, zero-length, or runs past midnight.
    InvalidTimeBlock,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Minutes in a day; block end times must not exceed this.
const MINUTES_PER_DAY: u16 = 1440;

/// Validates a course before insertion into the store.
///
/// Checks:
/// 1. The course has at least one section
/// 2. Every section id is non-blank
/// 3. Section ids are unique across all components
/// 4. Every time block satisfies `start < end <= 1440`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_course(course: &Course) -> ValidationResult {
    let mut errors = Vec::new();

    if course.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCourse,
            format!("Course '{}' has no sections", course.code),
        ));
    }

    let mut section_ids = HashSet::new();
    for section in course.all_sections() {
        if section.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSectionId,
                format!(
                    "Course '{}' has a {} section with a blank id",
                    course.code, section.component
                ),
            ));
        } else if !section_ids.insert(section.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSectionId,
                format!("Duplicate section id '{}' in course '{}'", section.id, course.code),
            ));
        }

        for block in &section.schedule {
            if block.start_min >= block.end_min || block.end_min > MINUTES_PER_DAY {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeBlock,
                    format!(
                        "Section '{}' of '{}' has an invalid block [{}, {}) on {}",
                        section.id,
                        course.code,
                        block.start_min,
                        block.end_min,
                        block.day.code()
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
