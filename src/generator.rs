//! Exhaustive conflict-free timetable enumeration.
//!
//! # Algorithm
//!
//! 1. Resolve the active duration scope. Generation runs independently
//!    per duration window; timetables never mix durations.
//! 2. Per window, build the slot list: one slot per (course, component)
//!    with candidates restricted to that window. A pin with a matching
//!    duration label collapses its slot to the single pinned section.
//! 3. Depth-first enumeration over the slots, pruning any partial
//!    combination whose newest section collides with an already-chosen
//!    one. This emits exactly the conflict-free subset of the full
//!    Cartesian product.
//!
//! # Determinism
//!
//! Output order is lexicographic over (course insertion order, canonical
//! component order, candidate listing order) and stable across repeated
//! calls with unchanged input.
//!
//! # Complexity
//!
//! Exponential in the slot count — inherent to full conflict-free
//! enumeration. Pins prune the search; realistic course counts keep it
//! fast.

use log::debug;

use crate::error::{Error, Result};
use crate::models::{ComponentType, DurationWindow, Section, Timetable, TimetableSlot};
use crate::pins::PinRegistry;
use crate::store::CourseStore;

/// Which duration windows to generate for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationScope {
    /// Generate independently for every window in the store.
    All,
    /// Generate only for the window with this [`DurationWindow::key`].
    Single(String),
}

/// One (course, component) choice-set for a duration window.
struct Slot<'a> {
    course_code: &'a str,
    component: ComponentType,
    candidates: Vec<&'a Section>,
}

/// Enumerates every conflict-free timetable for the scoped durations.
///
/// Zero courses — or a scope matching no window — yields an empty list,
/// never a placeholder empty timetable.
///
/// # Errors
/// [`Error::InvalidPin`] if a pin's duration label matches a window but
/// its section id is not among that window's candidates. The call is
/// atomic: on error nothing is emitted.
pub fn generate(
    store: &CourseStore,
    pins: &PinRegistry,
    scope: &DurationScope,
) -> Result<Vec<Timetable>> {
    let windows = store.durations();
    let mut out = Vec::new();

    for window in &windows {
        if let DurationScope::Single(key) = scope {
            if *key != window.key() {
                continue;
            }
        }
        generate_for_window(store, pins, window, &mut out)?;
    }

    debug!(
        "generated {} timetable(s) across {} duration window(s)",
        out.len(),
        windows.len()
    );
    Ok(out)
}

/// Generates all conflict-free combinations for one duration window.
fn generate_for_window(
    store: &CourseStore,
    pins: &PinRegistry,
    window: &DurationWindow,
    out: &mut Vec<Timetable>,
) -> Result<()> {
    let mut slots: Vec<Slot<'_>> = Vec::new();

    for course in store.all() {
        for component in course.component_types() {
            let candidates: Vec<&Section> = course
                .sections(component)
                .iter()
                .filter(|s| s.duration == *window)
                .collect();

            let candidates = match pins.get(&course.code, component) {
                // A pin scoped to this window must resolve, even when the
                // component has no candidates left in it
                Some(pin) if pin.duration == window.label => {
                    let pinned = candidates
                        .iter()
                        .copied()
                        .find(|s| s.id == pin.section_id)
                        .ok_or_else(|| Error::InvalidPin {
                            course: course.code.clone(),
                            component,
                            section: pin.section_id.clone(),
                            duration: pin.duration.clone(),
                        })?;
                    vec![pinned]
                }
                _ => candidates,
            };
            if candidates.is_empty() {
                // Component not offered in this window
                continue;
            }

            slots.push(Slot {
                course_code: &course.code,
                component,
                candidates,
            });
        }
    }

    if slots.is_empty() {
        return Ok(());
    }

    let mut chosen: Vec<&Section> = Vec::with_capacity(slots.len());
    extend(&slots, &mut chosen, window, out);
    Ok(())
}

/// Depth-first extension of a partial combination.
///
/// A candidate is only pushed if it collides with none of the sections
/// already chosen, so every discarded prefix short-circuits its whole
/// subtree of the Cartesian product.
fn extend<'a>(
    slots: &[Slot<'a>],
    chosen: &mut Vec<&'a Section>,
    window: &DurationWindow,
    out: &mut Vec<Timetable>,
) {
    let depth = chosen.len();
    if depth == slots.len() {
        out.push(Timetable {
            duration: window.clone(),
            slots: slots
                .iter()
                .zip(chosen.iter())
                .map(|(slot, &section)| TimetableSlot {
                    course_code: slot.course_code.to_string(),
                    component: slot.component,
                    section: section.clone(),
                })
                .collect(),
        });
        return;
    }

    for &candidate in &slots[depth].candidates {
        if chosen.iter().any(|prev| prev.conflicts_with(candidate)) {
            continue;
        }
        chosen.push(candidate);
        extend(slots, chosen, window, out);
        chosen.pop();
    }
}
