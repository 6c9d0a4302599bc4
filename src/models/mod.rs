//! Timetabling domain models.
//!
//! Core data types for representing added courses, their choosable
//! sections, and generated conflict-free timetables.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Course` | One added course, sections grouped by component type |
//! | `ComponentType` | Meeting category: lecture, lab, seminar, tutorial |
//! | `Section` | One choosable instance of a component, with its weekly schedule |
//! | `TimeBlock` | Weekly meeting interval: day + `[start, end)` minutes |
//! | `DurationWindow` | Academic sub-term span a section runs over |
//! | `Timetable` | One conflict-free section-per-slot assignment |

mod course;
mod duration;
mod section;
mod timetable;

pub use course::{ComponentType, Course, CourseCode};
pub use duration::DurationWindow;
pub use section::{Section, TimeBlock, Weekday};
pub use timetable::{Timetable, TimetableSlot};
