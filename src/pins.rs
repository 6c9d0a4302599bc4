//! Pin registry.
//!
//! A pin is a user-forced section choice: it removes a component type's
//! alternatives from free combination for one course. The registry holds
//! at most one pin per (course, component) pair — enforced by the map
//! shape — and supports per-course and global clearing.
//!
//! Pure in-memory state, no validation of its own: the planner validates
//! pins against the store when they are set, and the generator
//! re-validates them fail-fast at use.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::ComponentType;

/// A forced section choice, scoped to one duration label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Section id the pin forces.
    pub section_id: String,
    /// Duration label of the pinned section; the pin binds generation
    /// only in windows with a matching label.
    pub duration: String,
}

impl Pin {
    /// Creates a new pin.
    pub fn new(section_id: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            duration: duration.into(),
        }
    }
}

/// User-forced section selections, keyed by (course, component).
#[derive(Debug, Clone, Default)]
pub struct PinRegistry {
    pins: HashMap<String, BTreeMap<ComponentType, Pin>>,
}

impl PinRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pin, overwriting any existing pin for the pair.
    pub fn set(&mut self, course_code: impl Into<String>, component: ComponentType, pin: Pin) {
        self.pins
            .entry(course_code.into())
            .or_default()
            .insert(component, pin);
    }

    /// The active pin for a (course, component) pair, if any.
    pub fn get(&self, course_code: &str, component: ComponentType) -> Option<&Pin> {
        self.pins.get(course_code)?.get(&component)
    }

    /// Removes all pins belonging to a course. No-op if none exist.
    pub fn clear_for_course(&mut self, course_code: &str) {
        self.pins.remove(course_code);
    }

    /// Empties the registry.
    pub fn clear_all(&mut self) {
        self.pins.clear();
    }

    /// Total number of active pins.
    pub fn len(&self) -> usize {
        self.pins.values().map(BTreeMap::len).sum()
    }

    /// Whether no pins are active.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
