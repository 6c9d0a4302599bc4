//! Course and component-type models.
//!
//! A course groups its choosable sections by component type (lecture,
//! lab, seminar, tutorial). The generator picks exactly one section per
//! component type present, so the grouping here defines the slot
//! structure of the combinatorial search.
//!
//! # Identity
//! A course is keyed by its code (e.g. "COSC1P02"), unique within the
//! active (term, timetable type) context. Both context fields ride on
//! the course for caller-facing display; one context is active per
//! session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

use super::Section;

/// Category of a course's schedulable meeting.
///
/// The `Ord` derive fixes the canonical generation order:
/// lecture < lab < seminar < tutorial. This order, together with course
/// insertion order and section listing order, makes generator output
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// Lecture (`LEC`).
    Lecture,
    /// Laboratory (`LAB`).
    Lab,
    /// Seminar (`SEM`).
    Seminar,
    /// Tutorial (`TUT`).
    Tutorial,
}

impl ComponentType {
    /// Parses a component code (`LEC`, `LAB`, `SEM`, `TUT`), case-insensitive.
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "LEC" => Some(Self::Lecture),
            "LAB" => Some(Self::Lab),
            "SEM" => Some(Self::Seminar),
            "TUT" => Some(Self::Tutorial),
            _ => None,
        }
    }

    /// Three-letter component code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Lecture => "LEC",
            Self::Lab => "LAB",
            Self::Seminar => "SEM",
            Self::Tutorial => "TUT",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A parsed user-facing course code: `"<dept> <number> D<duration>"`.
///
/// Validated at the boundary — generation never sees malformed codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCode {
    /// Department prefix (e.g. "COSC"), uppercased.
    pub subject: String,
    /// Catalogue number (e.g. "1P02").
    pub number: String,
    /// Requested duration label (the part after `D`).
    pub duration: String,
}

impl CourseCode {
    /// Parses a raw course code like `"COSC 1P02 D2"`.
    ///
    /// # Errors
    /// [`Error::MalformedCourseCode`] unless the input is exactly three
    /// whitespace-separated parts with a non-empty `D<duration>` tail.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split_whitespace().collect();
        let malformed = || Error::MalformedCourseCode(raw.to_string());

        if parts.len() != 3 {
            return Err(malformed());
        }
        let duration = parts[2]
            .strip_prefix('D')
            .or_else(|| parts[2].strip_prefix('d'))
            .ok_or_else(malformed)?;
        if parts[0].is_empty() || parts[1].is_empty() || duration.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            subject: parts[0].to_ascii_uppercase(),
            number: parts[1].to_string(),
            duration: duration.to_string(),
        })
    }

    /// Store key for this code: `"<SUBJECT><number>"` (e.g. "COSC1P02").
    pub fn key(&self) -> String {
        format!("{}{}", self.subject, self.number)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} D{}", self.subject, self.number, self.duration)
    }
}

/// A course with its sections grouped by component type.
///
/// Sections keep their listing order within a component; component
/// types iterate in canonical order (see [`ComponentType`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course key (e.g. "COSC1P02").
    pub code: String,
    /// Academic term the course was fetched for (e.g. "FW2024").
    pub term: String,
    /// Timetable type the course was fetched for (e.g. "UG").
    pub timetable_type: String,
    components: BTreeMap<ComponentType, Vec<Section>>,
}

impl Course {
    /// Creates an empty course with the given key.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            term: String::new(),
            timetable_type: String::new(),
            components: BTreeMap::new(),
        }
    }

    /// Sets the academic term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets the timetable type.
    pub fn with_timetable_type(mut self, timetable_type: impl Into<String>) -> Self {
        self.timetable_type = timetable_type.into();
        self
    }

    /// Adds a section, grouped under its component type.
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    /// Adds a section, grouped under its component type.
    pub fn add_section(&mut self, section: Section) {
        self.components
            .entry(section.component)
            .or_default()
            .push(section);
    }

    /// Component types present, in canonical order.
    pub fn component_types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.components.keys().copied()
    }

    /// Sections for a component type, in listing order.
    ///
    /// Empty slice if the course has no such component.
    pub fn sections(&self, component: ComponentType) -> &[Section] {
        self.components
            .get(&component)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All sections across all components, canonical component order.
    pub fn all_sections(&self) -> impl Iterator<Item = &Section> {
        self.components.values().flatten()
    }

    /// Finds a section by component type and id.
    pub fn find_section(&self, component: ComponentType, section_id: &str) -> Option<&Section> {
        self.sections(component).iter().find(|s| s.id == section_id)
    }

    /// Total number of sections.
    pub fn section_count(&self) -> usize {
        self.components.values().map(Vec::len).sum()
    }

    /// Whether this course has no sections.
    pub fn is_empty(&self) -> bool {
        self.components.values().all(Vec::is_empty)
    }
}
