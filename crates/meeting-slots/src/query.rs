//! The meeting query: mandatory availability first, then optional preference.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::{free_slots, unavailable_intervals};
use crate::event::Event;
use crate::optimizer::optimize;
use crate::partition::WeightedPartition;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, DAY_END, WHOLE_DAY};

/// How an event shared by several optional attendees is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionalConflictPolicy {
    /// Each event involving any optional attendee adds one conflict.
    #[default]
    PerEvent,
    /// Each event adds one conflict per optional attendee it involves.
    PerAttendee,
}

/// Tunables for [`find_meeting_times_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub optional_policy: OptionalConflictPolicy,
}

/// Find the ranges where `request` can be held, using default options.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    find_meeting_times_with(events, request, &QueryOptions::default())
}

/// Find the ranges where `request` can be held.
///
/// Every returned range is free for all mandatory attendees and at least as
/// long as the requested duration. When optional attendees are present, only
/// the ranges where the fewest of them are busy are kept; if that leaves
/// nothing, the mandatory-only ranges are returned. The result is sorted by
/// start.
///
/// A duration that is negative or longer than a day yields no ranges; a zero
/// duration fits the whole day.
pub fn find_meeting_times_with(
    events: &[Event],
    request: &MeetingRequest,
    options: &QueryOptions,
) -> Vec<TimeRange> {
    let duration = request.duration();
    if duration < 0 || duration > i64::from(DAY_END) {
        debug!(duration, "duration outside the day, no slots");
        return Vec::new();
    }
    if duration == 0 {
        return vec![WHOLE_DAY];
    }

    let mandatory_busy = unavailable_intervals(events, request.attendees());
    let candidates = free_slots(&mandatory_busy, duration);

    let optional = request.optional_attendees();
    if optional.is_empty() || candidates.is_empty() {
        return candidates;
    }

    let mut optional_busy: Vec<(TimeRange, usize)> = events
        .iter()
        .filter(|e| !e.when().is_empty())
        .filter(|e| e.involves_any(optional))
        .map(|e| {
            let weight = match options.optional_policy {
                OptionalConflictPolicy::PerEvent => 1,
                OptionalConflictPolicy::PerAttendee => e.count_involved(optional),
            };
            (e.when(), weight)
        })
        .collect();
    optional_busy.sort_by(|(a, _), (b, _)| TimeRange::cmp_by_end(a, b));

    let mut partition = WeightedPartition::new(&candidates);
    for (range, weight) in optional_busy {
        for _ in 0..weight {
            partition.add(range);
        }
    }
    debug!(
        candidates = candidates.len(),
        pieces = partition.len(),
        policy = ?options.optional_policy,
        "partitioned candidate slots"
    );

    optimize(&partition.as_ordered_list(), duration, &candidates)
}
