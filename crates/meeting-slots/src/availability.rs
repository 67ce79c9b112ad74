//! Busy intervals and free candidate slots for a set of attendees.
//!
//! Collects the time ranges of every event involving the given attendees,
//! sorts them by start, then sweeps across the day to find the gaps long enough
//! to host a meeting.

use std::collections::BTreeSet;

use tracing::debug;

use crate::event::Event;
use crate::time_range::{TimeRange, DAY_END, START_OF_DAY};

/// Time ranges during which at least one of `attendees` is busy.
///
/// Each distinct range is reported once, however many events or attendees
/// share it, sorted ascending by start (then end). Empty event ranges block no
/// time and are left out.
pub fn unavailable_intervals(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    let busy: BTreeSet<TimeRange> = events
        .iter()
        .filter(|e| !e.when().is_empty())
        .filter(|e| e.involves_any(attendees))
        .map(Event::when)
        .collect();

    busy.into_iter().collect()
}

/// Gaps between `busy` ranges that can hold a meeting of `duration` minutes.
///
/// `busy` must be sorted by start. Overlapping or back-to-back busy ranges
/// collapse into one blocked span. The trailing gap, if any, reaches the end
/// of the day.
pub fn free_slots(busy: &[TimeRange], duration: i64) -> Vec<TimeRange> {
    let mut slots = Vec::new();
    let mut first_available = START_OF_DAY;

    for range in busy {
        if i64::from(range.start()) - i64::from(first_available) >= duration {
            slots.push(TimeRange::new_unchecked(first_available, range.start()));
        }
        first_available = first_available.max(range.end());
    }

    // Trailing free slot after the last busy period.
    if i64::from(DAY_END - first_available) >= duration {
        slots.push(TimeRange::new_unchecked(first_available, DAY_END));
    }

    debug!(
        busy = busy.len(),
        free = slots.len(),
        duration,
        "computed free slots"
    );
    slots
}
