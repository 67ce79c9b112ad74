//! Calendar events: a time range and the attendees it blocks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A calendar event blocking its attendees for one time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    title: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Whether any of this event's attendees is in `people`.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }

    /// How many of this event's attendees are in `people`.
    pub fn count_involved(&self, people: &BTreeSet<String>) -> usize {
        self.attendees.intersection(people).count()
    }
}
