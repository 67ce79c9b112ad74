//! Candidate slots split by optional attendees' busy time.
//!
//! A [`WeightedPartition`] starts as the mandatory-free candidate slots, each
//! with an unavailable-count of zero. Every optional busy range applied with
//! [`WeightedPartition::add`] splits the slots it overlaps at its boundaries and
//! bumps the count of the overlapping piece, so the partition ends up as
//! sub-ranges of uniform optional unavailability.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::time_range::TimeRange;

/// A candidate slot and the number of optional attendees busy during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedSlot {
    pub range: TimeRange,
    pub unavailable: u32,
}

impl WeightedSlot {
    pub fn new(range: TimeRange, unavailable: u32) -> Self {
        Self { range, unavailable }
    }

    /// Whether the slot alone can host a meeting of `duration` minutes.
    pub fn fits(&self, duration: i64) -> bool {
        i64::from(self.range.duration()) >= duration
    }

    /// Split this slot against a busy range it overlaps.
    ///
    /// Yields the part before the overlap, the overlap itself with the count
    /// raised by one, and the part after, skipping empty pieces. An identical
    /// busy range yields only the overlap.
    fn split(&self, busy: &TimeRange) -> Vec<WeightedSlot> {
        let range = self.range;
        let Some(overlap) = range.intersection(busy) else {
            return vec![*self];
        };

        [
            WeightedSlot::new(
                TimeRange::new_unchecked(range.start(), overlap.start()),
                self.unavailable,
            ),
            WeightedSlot::new(overlap, self.unavailable + 1),
            WeightedSlot::new(
                TimeRange::new_unchecked(overlap.end(), range.end()),
                self.unavailable,
            ),
        ]
        .into_iter()
        .filter(|piece| !piece.range.is_empty())
        .collect()
    }
}

/// Candidate slots with per-slot optional unavailability, owned by one query.
#[derive(Debug, Clone, Default)]
pub struct WeightedPartition {
    slots: Vec<WeightedSlot>,
}

impl WeightedPartition {
    /// Seed the partition with candidate slots, all fully available.
    pub fn new(candidates: &[TimeRange]) -> Self {
        Self {
            slots: candidates
                .iter()
                .map(|range| WeightedSlot::new(*range, 0))
                .collect(),
        }
    }

    /// Apply one optional attendee's busy range.
    pub fn add(&mut self, busy: TimeRange) {
        let mut next = Vec::with_capacity(self.slots.len() + 2);
        for slot in &self.slots {
            if slot.range.overlaps(&busy) {
                let pieces = slot.split(&busy);
                trace!(slot = %slot.range, %busy, pieces = pieces.len(), "split slot");
                next.extend(pieces);
            } else {
                next.push(*slot);
            }
        }
        self.slots = next;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All current slots, sorted ascending by start.
    pub fn as_ordered_list(&self) -> Vec<WeightedSlot> {
        let mut slots = self.slots.clone();
        slots.sort_by_key(|slot| slot.range);
        slots
    }
}
