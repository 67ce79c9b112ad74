//! Half-open minute ranges over a single day.
//!
//! A [`TimeRange`] covers `[start, end)` in minutes since midnight, bounded by
//! [`DAY_END`]. A range whose end is `DAY_END` reaches the end of the day; its
//! end instant is treated as contained, which makes [`WHOLE_DAY`] closed at both
//! edges for membership checks.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Number of minutes in a day; the exclusive upper bound of every range.
pub const DAY_END: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day. Pair with `inclusive = true` in
/// [`TimeRange::from_start_end`] to reach the end of the day.
pub const END_OF_DAY: u32 = DAY_END - 1;

/// The range spanning the entire day.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: DAY_END,
};

/// An immutable `[start, end)` interval of minutes within one day.
///
/// Equality, hashing and the derived ordering are structural: ranges sort by
/// start, then by end. Use [`TimeRange::cmp_by_end`] for end ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// Build a range, rejecting `start > end` and ends past [`DAY_END`].
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidRange { start, end });
        }
        if end > DAY_END {
            return Err(SlotError::OutOfDay { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from two minute marks. With `inclusive`, the minute at
    /// `end` is part of the range, so `from_start_end(t, END_OF_DAY, true)`
    /// reaches the end of the day.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive { end.saturating_add(1) } else { end };
        Self::new(start, end)
    }

    /// Build a range of `duration` minutes starting at `start`.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::new(start, start.saturating_add(duration))
    }

    /// Build a range from two wall-clock times. `end` at midnight is read as the
    /// end of the day.
    pub fn from_clock(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let end = match minute_of(end) {
            START_OF_DAY => DAY_END,
            minutes => minutes,
        };
        Self::new(minute_of(start), end)
    }

    /// Minutes since midnight for `hour:minute`.
    pub const fn minutes(hour: u32, minute: u32) -> u32 {
        hour * 60 + minute
    }

    /// Range construction for callers that already uphold the invariant.
    pub(crate) const fn new_unchecked(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the range runs up to (and includes) the end of the day.
    pub fn reaches_end_of_day(&self) -> bool {
        self.end == DAY_END
    }

    /// Whether the two half-open ranges share at least one minute.
    ///
    /// Ranges that only touch (`a.end == b.start`) do not overlap, and an empty
    /// range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the minute mark `t` falls inside the range. The end of the day
    /// counts as inside any range that reaches it.
    pub fn contains_minute(&self, t: u32) -> bool {
        self.start <= t && (t < self.end || (t == DAY_END && self.reaches_end_of_day()))
    }

    /// The shared part of two overlapping ranges.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::new_unchecked(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Whether `other` starts exactly where this range ends.
    pub fn abuts(&self, other: &TimeRange) -> bool {
        self.end == other.start
    }

    /// Order by end ascending, then by start.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end).then(a.start.cmp(&b.start))
    }
}

impl fmt::Display for TimeRange {
    /// Formats as `HH:MM-HH:MM`; the end of the day prints as `24:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Minutes since midnight for a wall-clock time. Seconds are discarded.
pub fn minute_of(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse a `HH:MM` clock string into minutes since midnight. `24:00` denotes
/// the end of the day.
pub fn parse_clock(s: &str) -> Result<u32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(DAY_END);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(minute_of)
        .map_err(|e| SlotError::InvalidTime(format!("'{}': {}", s, e)))
}

// ---------------------------------------------------------------------------
// Deserialization: accept minutes or clock strings, then validate
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum MinuteMark {
    Minutes(u32),
    Clock(String),
}

impl MinuteMark {
    fn resolve(self) -> Result<u32> {
        match self {
            MinuteMark::Minutes(m) => Ok(m),
            MinuteMark::Clock(s) => parse_clock(&s),
        }
    }
}

#[derive(Deserialize)]
struct RawRange {
    start: MinuteMark,
    end: MinuteMark,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::new(raw.start.resolve()?, raw.end.resolve()?)
    }
}
