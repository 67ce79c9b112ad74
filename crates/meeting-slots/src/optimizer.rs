//! Choose the slots that keep the most optional attendees available.
//!
//! A single pass over the weighted partition, in start order, keeps every slot
//! long enough for the meeting whose unavailable-count equals the lowest seen
//! so far, and discards everything kept earlier whenever a strictly better slot
//! turns up. Slots too short to host the meeting alone are fused into an
//! abutting neighbour instead of being considered on their own.

use tracing::debug;

use crate::partition::WeightedSlot;
use crate::time_range::TimeRange;

/// How a slot that fits the meeting is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Same count as the current best: kept alongside the others.
    Tie,
    /// Lower count than anything so far: replaces all kept slots.
    Improvement,
}

/// Which neighbour a short slot is fused into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbour {
    /// The last kept slot, which ends where this one starts.
    Previous,
    /// The next slot in order, which starts where this one ends.
    Following,
}

/// Outcome for one slot of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDecision {
    Accept(Acceptance),
    Merge(Neighbour),
    Drop,
}

/// Decide what happens to `slot`.
///
/// `previous` is the last kept slot, `following` the next unprocessed one and
/// `best` the lowest count kept so far (`None` before anything is kept).
///
/// A short slot extends `previous` only when it is no worse than `previous`,
/// so the extended range never carries more conflicts than it was kept for.
pub fn decide(
    slot: &WeightedSlot,
    previous: Option<&WeightedSlot>,
    following: Option<&WeightedSlot>,
    best: Option<u32>,
    duration: i64,
) -> SlotDecision {
    if slot.fits(duration) {
        return match best {
            Some(best) if slot.unavailable == best => SlotDecision::Accept(Acceptance::Tie),
            Some(best) if slot.unavailable > best => SlotDecision::Drop,
            _ => SlotDecision::Accept(Acceptance::Improvement),
        };
    }

    if previous.is_some_and(|p| p.range.abuts(&slot.range) && slot.unavailable <= p.unavailable) {
        SlotDecision::Merge(Neighbour::Previous)
    } else if following.is_some_and(|n| slot.range.abuts(&n.range)) {
        SlotDecision::Merge(Neighbour::Following)
    } else {
        SlotDecision::Drop
    }
}

/// Fold a short slot into the slot that follows it.
///
/// The merged slot takes the worse of the two counts, or the following slot's
/// count when that slot is itself too short.
fn fuse(short: &WeightedSlot, next: &WeightedSlot, duration: i64) -> WeightedSlot {
    let unavailable = if next.fits(duration) {
        short.unavailable.max(next.unavailable)
    } else {
        next.unavailable
    };
    WeightedSlot::new(
        TimeRange::new_unchecked(short.range.start(), next.range.end()),
        unavailable,
    )
}

/// Pick the meeting ranges with the fewest unavailable optional attendees.
///
/// `slots` must be ordered by start, as produced by
/// [`WeightedPartition::as_ordered_list`](crate::partition::WeightedPartition::as_ordered_list).
/// When nothing qualifies, `fallback` is returned unchanged.
pub fn optimize(slots: &[WeightedSlot], duration: i64, fallback: &[TimeRange]) -> Vec<TimeRange> {
    let mut best: Option<u32> = None;
    let mut kept: Vec<WeightedSlot> = Vec::new();
    let mut carried: Option<WeightedSlot> = None;

    for (i, raw) in slots.iter().enumerate() {
        let slot = match carried.take() {
            Some(short) => fuse(&short, raw, duration),
            None => *raw,
        };

        match decide(&slot, kept.last(), slots.get(i + 1), best, duration) {
            SlotDecision::Accept(Acceptance::Tie) => kept.push(slot),
            SlotDecision::Accept(Acceptance::Improvement) => {
                kept.clear();
                kept.push(slot);
                best = Some(slot.unavailable);
            }
            SlotDecision::Merge(Neighbour::Previous) => {
                if let Some(last) = kept.last_mut() {
                    last.range = TimeRange::new_unchecked(last.range.start(), slot.range.end());
                }
            }
            SlotDecision::Merge(Neighbour::Following) => carried = Some(slot),
            SlotDecision::Drop => {}
        }
    }

    if kept.is_empty() {
        debug!(fallback = fallback.len(), "no slot qualified, using fallback");
        return fallback.to_vec();
    }

    debug!(kept = kept.len(), best = ?best, "optimized slots");
    kept.into_iter().map(|slot| slot.range).collect()
}
