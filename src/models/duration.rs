//! Academic duration window model.
//!
//! A duration window is the sub-term span a section runs over
//! (first half, second half, full term). Timetables are homogeneous in
//! duration: sections from different windows cannot coexist in one
//! schedule view, so generation is scoped per window.
//!
//! Dates are opaque strings supplied by the fetch collaborator; the core
//! compares them, it never interprets them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived, deduplicated academic duration window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationWindow {
    /// First day of classes for this window.
    pub start_date: String,
    /// Last day of classes for this window.
    pub end_date: String,
    /// Duration label from the source data (e.g. "1", "2", "3").
    pub label: String,
}

impl DurationWindow {
    /// Creates a new duration window.
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            label: label.into(),
        }
    }

    /// Caller-facing scope handle: `"<start>-<end>-<label>"`.
    ///
    /// Used to select a single window for generation.
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.start_date, self.end_date, self.label)
    }
}

impl fmt::Display for DurationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
