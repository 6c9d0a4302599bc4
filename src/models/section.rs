//! Section and weekly time-block models.
//!
//! A section is one concrete, choosable instance of a course component
//! (e.g. "LEC 2"), with its own weekly meeting schedule. Conflict
//! detection lives here: two time-blocks collide iff they fall on the
//! same weekday and their half-open minute intervals overlap.
//!
//! # Time Model
//! Times are minutes from midnight (minute resolution), and every block
//! is a half-open interval `[start, end)` — a block ending exactly when
//! another starts does not conflict with it.

use serde::{Deserialize, Serialize};

use super::{ComponentType, DurationWindow};

/// Day of the week.
///
/// The `Ord` derive fixes Monday-first ordering. Single-letter codes
/// follow the timetable data source: `M T W R F S U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday (`M`).
    Monday,
    /// Tuesday (`T`).
    Tuesday,
    /// Wednesday (`W`).
    Wednesday,
    /// Thursday (`R`).
    Thursday,
    /// Friday (`F`).
    Friday,
    /// Saturday (`S`).
    Saturday,
    /// Sunday (`U`).
    Sunday,
}

impl Weekday {
    /// Parses a single-letter day code (`M T W R F S U`).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Self::Monday),
            'T' => Some(Self::Tuesday),
            'W' => Some(Self::Wednesday),
            'R' => Some(Self::Thursday),
            'F' => Some(Self::Friday),
            'S' => Some(Self::Saturday),
            'U' => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Single-letter day code.
    pub fn code(&self) -> char {
        match self {
            Self::Monday => 'M',
            Self::Tuesday => 'T',
            Self::Wednesday => 'W',
            Self::Thursday => 'R',
            Self::Friday => 'F',
            Self::Saturday => 'S',
            Self::Sunday => 'U',
        }
    }
}

/// A weekly meeting interval: day + `[start, end)` in minutes from midnight.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Day of the week this block repeats on.
    pub day: Weekday,
    /// Start minute (inclusive).
    pub start_min: u16,
    /// End minute (exclusive).
    pub end_min: u16,
}

impl TimeBlock {
    /// Creates a new time block.
    pub fn new(day: Weekday, start_min: u16, end_min: u16) -> Self {
        Self {
            day,
            start_min,
            end_min,
        }
    }

    /// Length of this block in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min - self.start_min
    }

    /// Whether two blocks collide.
    ///
    /// True iff both fall on the same day and their open intervals
    /// overlap. Touching endpoints (A ends exactly when B starts) do
    /// not conflict. Symmetric.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_min < other.end_min
            && other.start_min < self.end_min
    }
}

/// One choosable instance of a course component.
///
/// Belongs to exactly one course and one component type, carries its
/// weekly schedule and the duration window it runs over. A section with
/// an empty schedule (online/asynchronous) conflicts with nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier, unique within its course (e.g. "LEC 2").
    pub id: String,
    /// Component type this section fulfills.
    pub component: ComponentType,
    /// Weekly meeting blocks.
    pub schedule: Vec<TimeBlock>,
    /// Academic duration window this section runs over.
    pub duration: DurationWindow,
}

impl Section {
    /// Creates a section with an empty schedule.
    pub fn new(id: impl Into<String>, component: ComponentType, duration: DurationWindow) -> Self {
        Self {
            id: id.into(),
            component,
            schedule: Vec::new(),
            duration,
        }
    }

    /// Adds a weekly meeting block.
    pub fn with_block(mut self, block: TimeBlock) -> Self {
        self.schedule.push(block);
        self
    }

    /// Whether any meeting block of this section collides with any
    /// block of `other`.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.schedule
            .iter()
            .any(|a| other.schedule.iter().any(|b| a.conflicts_with(b)))
    }
}
