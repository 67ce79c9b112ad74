//! Meeting requests: who must attend, who would ideally attend, and for how long.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A request for a meeting slot.
///
/// Mandatory attendees are fixed at construction; optional attendees are added
/// afterwards with [`MeetingRequest::add_optional_attendee`]. The duration is in
/// minutes. Out-of-range durations are accepted here and yield no slots when
/// queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    duration: i64,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    /// Add an optional attendee. Someone who is already mandatory stays
    /// mandatory only.
    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        let attendee = attendee.into();
        if !self.attendees.contains(&attendee) {
            self.optional_attendees.insert(attendee);
        }
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }
}
