//! # meeting-slots
//!
//! Single-day meeting slot finder for mandatory and optional attendees.
//!
//! Given the events on everyone's calendar and a [`MeetingRequest`], the query
//! returns every range where all mandatory attendees are free for the requested
//! duration, narrowed to the ranges where the fewest optional attendees are
//! busy. Times are minutes since midnight in `[0, 1440]`.
//!
//! ```rust
//! use meeting_slots::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_duration(TimeRange::minutes(8, 30), 30).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0].to_string(), "00:00-08:30");
//! assert_eq!(slots[1].to_string(), "09:00-24:00");
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — half-open minute ranges and day constants
//! - [`event`] — calendar events and the attendees they block
//! - [`request`] — meeting requests
//! - [`availability`] — busy intervals and free candidate slots
//! - [`partition`] — candidate slots weighted by optional unavailability
//! - [`optimizer`] — pick the least-conflicted slots
//! - [`query`] — the top-level query and its options
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod event;
pub mod optimizer;
pub mod partition;
pub mod query;
pub mod request;
pub mod time_range;

pub use error::SlotError;
pub use event::Event;
pub use partition::{WeightedPartition, WeightedSlot};
pub use query::{find_meeting_times, find_meeting_times_with, OptionalConflictPolicy, QueryOptions};
pub use request::MeetingRequest;
pub use time_range::{TimeRange, DAY_END, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
