//! Tests for splitting candidate slots by optional attendees' busy time.

use meeting_slots::{TimeRange, WeightedPartition, WeightedSlot, DAY_END};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

fn slot(start: u32, end: u32, unavailable: u32) -> WeightedSlot {
    WeightedSlot::new(range(start, end), unavailable)
}

// ── Seeding ─────────────────────────────────────────────────────────────────

#[test]
fn new_partition_has_zero_counts() {
    let partition = WeightedPartition::new(&[range(600, 700), range(0, 480)]);

    assert_eq!(partition.len(), 2);
    assert_eq!(
        partition.as_ordered_list(),
        vec![slot(0, 480, 0), slot(600, 700, 0)]
    );
}

#[test]
fn empty_partition_stays_empty() {
    let mut partition = WeightedPartition::new(&[]);
    partition.add(range(0, 60));

    assert!(partition.is_empty());
}

// ── Splitting ───────────────────────────────────────────────────────────────

#[test]
fn identical_range_bumps_count() {
    let mut partition = WeightedPartition::new(&[range(480, 540)]);
    partition.add(range(480, 540));

    assert_eq!(partition.as_ordered_list(), vec![slot(480, 540, 1)]);
}

#[test]
fn covering_range_bumps_whole_slot() {
    let mut partition = WeightedPartition::new(&[range(480, 540)]);
    partition.add(range(0, DAY_END));

    assert_eq!(partition.as_ordered_list(), vec![slot(480, 540, 1)]);
}

#[test]
fn nested_range_splits_into_three() {
    let mut partition = WeightedPartition::new(&[range(480, 720)]);
    partition.add(range(540, 600));

    assert_eq!(
        partition.as_ordered_list(),
        vec![slot(480, 540, 0), slot(540, 600, 1), slot(600, 720, 0)]
    );
}

#[test]
fn range_overlapping_the_end_splits_into_two() {
    let mut partition = WeightedPartition::new(&[range(480, 600)]);
    partition.add(range(540, 660));

    assert_eq!(
        partition.as_ordered_list(),
        vec![slot(480, 540, 0), slot(540, 600, 1)]
    );
}

#[test]
fn range_overlapping_the_start_splits_into_two() {
    let mut partition = WeightedPartition::new(&[range(480, 600)]);
    partition.add(range(420, 510));

    assert_eq!(
        partition.as_ordered_list(),
        vec![slot(480, 510, 1), slot(510, 600, 0)]
    );
}

#[test]
fn range_sharing_start_leaves_no_empty_piece() {
    let mut partition = WeightedPartition::new(&[range(480, 600)]);
    partition.add(range(480, 510));

    assert_eq!(
        partition.as_ordered_list(),
        vec![slot(480, 510, 1), slot(510, 600, 0)]
    );
}

#[test]
fn adjacent_range_leaves_slot_untouched() {
    let mut partition = WeightedPartition::new(&[range(480, 600)]);
    partition.add(range(600, 660));
    partition.add(range(420, 480));

    assert_eq!(partition.as_ordered_list(), vec![slot(480, 600, 0)]);
}

#[test]
fn empty_range_leaves_slot_untouched() {
    let mut partition = WeightedPartition::new(&[range(0, 100)]);
    partition.add(range(70, 70));

    assert_eq!(partition.as_ordered_list(), vec![slot(0, 100, 0)]);
}

#[test]
fn overlapping_optional_ranges_stack_counts() {
    let mut partition = WeightedPartition::new(&[range(0, 600)]);
    partition.add(range(100, 300));
    partition.add(range(200, 400));

    assert_eq!(
        partition.as_ordered_list(),
        vec![
            slot(0, 100, 0),
            slot(100, 200, 1),
            slot(200, 300, 2),
            slot(300, 400, 1),
            slot(400, 600, 0),
        ]
    );
}

#[test]
fn one_busy_range_can_split_several_slots() {
    let mut partition = WeightedPartition::new(&[range(0, 100), range(200, 300)]);
    partition.add(range(50, 250));

    assert_eq!(
        partition.as_ordered_list(),
        vec![
            slot(0, 50, 0),
            slot(50, 100, 1),
            slot(200, 250, 1),
            slot(250, 300, 0),
        ]
    );
}

#[test]
fn application_order_does_not_change_the_result() {
    let busy = [range(100, 300), range(200, 400), range(350, 500)];

    let mut forward = WeightedPartition::new(&[range(0, 600)]);
    busy.iter().for_each(|b| forward.add(*b));

    let mut backward = WeightedPartition::new(&[range(0, 600)]);
    busy.iter().rev().for_each(|b| backward.add(*b));

    let counts = |p: &WeightedPartition| -> Vec<(u32, u32)> {
        let mut minute_counts = Vec::new();
        for s in p.as_ordered_list() {
            for m in s.range.start()..s.range.end() {
                minute_counts.push((m, s.unavailable));
            }
        }
        minute_counts
    };
    assert_eq!(counts(&forward), counts(&backward));
}

#[test]
fn fits_compares_length_with_duration() {
    assert!(slot(0, 30, 0).fits(30));
    assert!(!slot(0, 29, 0).fits(30));
}
