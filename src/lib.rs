//! Conflict-free course timetable generation.
//!
//! Given a set of courses, each decomposed into scheduling components
//! (lecture, lab, seminar, tutorial) with alternative sections, this
//! crate enumerates every combination of sections — one per component —
//! whose weekly meeting times do not collide, so a caller can browse
//! valid schedules. User-pinned sections override free combination, and
//! generation is scoped per academic duration window.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Section`, `TimeBlock`,
//!   `DurationWindow`, `Timetable`
//! - **`store`**: `CourseStore` — insertion-ordered added courses and
//!   the derived duration index
//! - **`pins`**: `PinRegistry` — user-forced section choices
//! - **`generator`**: exhaustive conflict-free enumeration, deterministic
//!   output order
//! - **`validation`**: structural integrity checks for fetched course data
//! - **`planner`**: `Planner` — the facade the presentation layer drives
//!
//! # Architecture
//!
//! Pure in-memory core, single-threaded and synchronous. Fetching course
//! data, rendering, and notification are external collaborators: courses
//! arrive already fetched, and the caller re-invokes generation after
//! each mutation — there is no hidden observer graph and no I/O.

pub mod error;
pub mod generator;
pub mod models;
pub mod pins;
pub mod planner;
pub mod store;
pub mod validation;

pub use error::{Error, Result};
